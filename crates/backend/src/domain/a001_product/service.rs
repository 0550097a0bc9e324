use super::error::ProductError;
use super::repository::ProductRepository;
use contracts::domain::a001_product::{
    validate_request, CreateProductRequest, CreateProductResponse, ProductId, ProductRecord,
};

/// Validate and store a submitted product
pub async fn create(
    repo: &dyn ProductRepository,
    request: CreateProductRequest,
) -> Result<CreateProductResponse, ProductError> {
    let errors = validate_request(&request);
    if !errors.is_empty() {
        tracing::warn!(
            "Product '{}' rejected: {} field error(s)",
            request.product_name,
            errors.len()
        );
        return Err(ProductError::Validation(errors));
    }

    let status = request.status;
    let variants = request
        .variation_details
        .as_ref()
        .map(|t| t.len())
        .unwrap_or(0);
    let record = ProductRecord::new_for_insert(request);
    let name = record.data.product_name.clone();

    let id = repo.insert(record).await?;
    tracing::info!(
        "Product '{}' stored as {} ({}, {} variation row(s))",
        name,
        id.as_string(),
        status.code(),
        variants
    );

    Ok(CreateProductResponse {
        product_id: id.as_string(),
        status,
    })
}

pub async fn get_by_id(repo: &dyn ProductRepository, id: &str) -> Result<ProductRecord, ProductError> {
    let id = ProductId::from_string(id).map_err(ProductError::InvalidId)?;
    repo.get_by_id(id).await?.ok_or(ProductError::NotFound)
}

pub async fn list_all(repo: &dyn ProductRepository) -> Result<Vec<ProductRecord>, ProductError> {
    Ok(repo.list_all().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::repository::InMemoryProductRepository;
    use contracts::domain::a001_product::{
        PackageDimensions, ProductDraft, ProductStatus, RowField, VariationEditor,
    };

    fn draft() -> ProductDraft {
        ProductDraft {
            product_name: "Linen shirt".into(),
            selected_category: Some(1),
            product_description: "Breathable linen shirt".into(),
            brand: "Acme".into(),
            price: "59.00".into(),
            sku: "LIN-01".into(),
            stock: "12".into(),
            weight: "0.25".into(),
            package_dimensions: PackageDimensions::default(),
        }
    }

    #[tokio::test]
    async fn test_create_and_fetch() {
        let repo = InMemoryProductRepository::new();
        let request = draft().to_request(&VariationEditor::new(), ProductStatus::Pending);

        let created = create(&repo, request).await.unwrap();
        assert_eq!(created.status, ProductStatus::Pending);

        let stored = get_by_id(&repo, &created.product_id).await.unwrap();
        assert_eq!(stored.data.product_name, "Linen shirt");
        assert_eq!(list_all(&repo).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_request_is_not_stored() {
        let repo = InMemoryProductRepository::new();
        let mut draft = draft();
        draft.product_name.clear();
        let request = draft.to_request(&VariationEditor::new(), ProductStatus::Pending);

        match create(&repo, request).await {
            Err(ProductError::Validation(errors)) => {
                assert!(errors.contains_key("productName"))
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(list_all(&repo).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_with_variations() {
        let repo = InMemoryProductRepository::new();
        let mut editor = VariationEditor::new();
        editor.enable_variations();
        editor.set_group_name(0, "Color");
        editor.set_option_scratch(0, "Sand");
        editor.commit_option(0);
        editor.set_row_field(0, RowField::Price, "59");
        editor.set_row_field(0, RowField::Stock, "4");
        editor.set_row_field(0, RowField::Sku, "LIN-SAND");

        let request = draft().to_request(&editor, ProductStatus::Pending);
        let created = create(&repo, request).await.unwrap();
        let stored = get_by_id(&repo, &created.product_id).await.unwrap();

        let details = stored.data.variation_details.unwrap();
        assert_eq!(details.keys(), vec!["Sand"]);
        assert_eq!(details.get(0).unwrap().sku, "LIN-SAND");
    }

    #[tokio::test]
    async fn test_get_by_id_errors() {
        let repo = InMemoryProductRepository::new();
        assert!(matches!(
            get_by_id(&repo, "nope").await,
            Err(ProductError::InvalidId(_))
        ));
        let missing = ProductId::new_v4().as_string();
        assert!(matches!(
            get_by_id(&repo, &missing).await,
            Err(ProductError::NotFound)
        ));
    }
}
