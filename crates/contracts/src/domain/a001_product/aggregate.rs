use super::editor::VariationEditor;
use super::variation::{VariationGroup, VariationTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Validation messages keyed by wire field name (e.g. `productName`,
/// `variationDetails[Red-S].price`)
pub type FieldErrors = BTreeMap<String, String>;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Status
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    Pending,
}

impl ProductStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "draft",
            ProductStatus::Pending => "pending",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "Draft",
            ProductStatus::Pending => "Pending review",
        }
    }
}

// ============================================================================
// Form draft
// ============================================================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDimensions {
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub width: String,
    #[serde(default)]
    pub height: String,
}

impl PackageDimensions {
    pub fn is_complete(&self) -> bool {
        [&self.length, &self.width, &self.height]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

/// Scalar fields of the product form, kept as typed text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub product_name: String,
    pub selected_category: Option<i64>,
    pub product_description: String,
    pub brand: String,
    pub price: String,
    pub sku: String,
    pub stock: String,
    pub weight: String,
    pub package_dimensions: PackageDimensions,
}

impl ProductDraft {
    /// Assemble the submission payload from the form state
    pub fn to_request(
        &self,
        variations: &VariationEditor,
        status: ProductStatus,
    ) -> CreateProductRequest {
        let has_variations = variations.enabled();
        CreateProductRequest {
            product_name: self.product_name.clone(),
            selected_category: self.selected_category,
            product_description: self.product_description.clone(),
            brand: self.brand.clone(),
            price: self.price.clone(),
            sku: self.sku.clone(),
            stock: self.stock.clone(),
            has_variations,
            variation_config: has_variations.then(|| variations.groups().to_vec()),
            variation_details: has_variations.then(|| variations.table().clone()),
            weight: self.weight.clone(),
            package_dimensions: self.package_dimensions.clone(),
            status,
        }
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProductRequest {
    #[serde(rename = "productName")]
    pub product_name: String,

    #[serde(rename = "selectedCategory")]
    pub selected_category: Option<i64>,

    #[serde(rename = "productDescription", default)]
    pub product_description: String,

    #[serde(default)]
    pub brand: String,

    #[serde(default)]
    pub price: String,

    #[serde(default)]
    pub sku: String,

    #[serde(default)]
    pub stock: String,

    #[serde(rename = "hasVariations", default)]
    pub has_variations: bool,

    #[serde(rename = "variationConfig")]
    pub variation_config: Option<Vec<VariationGroup>>,

    #[serde(rename = "variationDetails")]
    pub variation_details: Option<VariationTable>,

    #[serde(default)]
    pub weight: String,

    #[serde(rename = "packageDimensions", default)]
    pub package_dimensions: PackageDimensions,

    pub status: ProductStatus,
}

/// Success descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProductResponse {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub status: ProductStatus,
}

/// Failure descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductErrorResponse {
    pub message: String,
    #[serde(rename = "fieldErrors", default)]
    pub field_errors: FieldErrors,
}

/// Product as kept by the API after a successful submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(flatten)]
    pub data: CreateProductRequest,
}

impl ProductRecord {
    pub fn new_for_insert(data: CreateProductRequest) -> Self {
        Self {
            id: ProductId::new_v4(),
            created_at: chrono::Utc::now(),
            data,
        }
    }
}
