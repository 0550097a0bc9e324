//! Submission validation shared by the form (pre-flight) and the API.

use super::aggregate::{CreateProductRequest, FieldErrors, ProductStatus};
use super::synthesizer::synthesize;
use super::variation::{VariationTable, MAX_VARIATION_GROUPS};

const REQUIRED: &str = "This field is required";

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Non-negative decimal, e.g. "25.50"
pub fn parse_amount(value: &str) -> Result<f64, String> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err("Must be zero or greater".into());
    }
    Ok(parsed)
}

/// Non-negative whole number, e.g. "100"
pub fn parse_quantity(value: &str) -> Result<u32, String> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| "Must be a whole number, zero or greater".to_string())
}

fn require(errors: &mut FieldErrors, field: &str, value: &str) -> bool {
    if blank(value) {
        errors.insert(field.to_string(), REQUIRED.into());
        false
    } else {
        true
    }
}

fn check_amount(errors: &mut FieldErrors, field: &str, value: &str) {
    if require(errors, field, value) {
        if let Err(e) = parse_amount(value) {
            errors.insert(field.to_string(), e);
        }
    }
}

fn check_quantity(errors: &mut FieldErrors, field: &str, value: &str) {
    if require(errors, field, value) {
        if let Err(e) = parse_quantity(value) {
            errors.insert(field.to_string(), e);
        }
    }
}

fn check_variations(request: &CreateProductRequest, errors: &mut FieldErrors) {
    let groups = request.variation_config.as_deref().unwrap_or_default();
    if groups.is_empty() || groups.len() > MAX_VARIATION_GROUPS {
        errors.insert(
            "variationConfig".into(),
            format!("Add 1 to {} variation groups", MAX_VARIATION_GROUPS),
        );
        return;
    }

    for (i, group) in groups.iter().enumerate() {
        if blank(&group.name) {
            errors.insert(format!("variationConfig[{}].name", i), REQUIRED.into());
        }
        if group.options.is_empty() {
            errors.insert(
                format!("variationConfig[{}].options", i),
                "Add at least one option".into(),
            );
        }
    }

    let empty = VariationTable::default();
    let details = request.variation_details.as_ref().unwrap_or(&empty);
    let expected = synthesize(true, groups, &VariationTable::default());
    if details.is_empty() || details.keys() != expected.keys() {
        errors.insert(
            "variationDetails".into(),
            "Variation list does not match the variation options".into(),
        );
        return;
    }

    for row in details.iter() {
        let prefix = format!("variationDetails[{}]", row.row_key);
        check_amount(errors, &format!("{}.price", prefix), &row.price);
        check_quantity(errors, &format!("{}.stock", prefix), &row.stock);
        require(errors, &format!("{}.sku", prefix), &row.sku);
    }
}

/// Collect every problem with `request`; an empty map means it can be accepted.
///
/// Drafts only need a name. Products sent for review need the full listing.
pub fn validate_request(request: &CreateProductRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();

    require(&mut errors, "productName", &request.product_name);

    let dims = &request.package_dimensions;
    for (field, value) in [
        ("packageDimensions.length", &dims.length),
        ("packageDimensions.width", &dims.width),
        ("packageDimensions.height", &dims.height),
    ] {
        if !blank(value) {
            if let Err(e) = parse_amount(value) {
                errors.insert(field.to_string(), e);
            }
        }
    }

    if request.status == ProductStatus::Draft {
        return errors;
    }

    if request.selected_category.is_none() {
        errors.insert("selectedCategory".into(), "Select a category".into());
    }
    require(&mut errors, "productDescription", &request.product_description);
    check_amount(&mut errors, "weight", &request.weight);

    if request.has_variations {
        check_variations(request, &mut errors);
    } else {
        check_amount(&mut errors, "price", &request.price);
        require(&mut errors, "sku", &request.sku);
        check_quantity(&mut errors, "stock", &request.stock);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::{PackageDimensions, ProductDraft};
    use crate::domain::a001_product::editor::VariationEditor;
    use crate::domain::a001_product::variation::RowField;

    fn simple_draft() -> ProductDraft {
        ProductDraft {
            product_name: "Canvas tote bag".into(),
            selected_category: Some(2),
            product_description: "Sturdy canvas tote".into(),
            brand: String::new(),
            price: "19.90".into(),
            sku: "TOTE-01".into(),
            stock: "40".into(),
            weight: "0.4".into(),
            package_dimensions: PackageDimensions::default(),
        }
    }

    fn colour_editor() -> VariationEditor {
        let mut editor = VariationEditor::new();
        editor.enable_variations();
        editor.set_group_name(0, "Color");
        for colour in ["Red", "Blue"] {
            editor.set_option_scratch(0, colour);
            editor.commit_option(0);
        }
        editor
    }

    #[test]
    fn test_complete_simple_product_passes() {
        let request = simple_draft().to_request(&VariationEditor::new(), ProductStatus::Pending);
        assert!(validate_request(&request).is_empty());
    }

    #[test]
    fn test_draft_only_needs_name() {
        let draft = ProductDraft {
            product_name: "Tote".into(),
            ..Default::default()
        };
        let request = draft.to_request(&VariationEditor::new(), ProductStatus::Draft);
        assert!(validate_request(&request).is_empty());

        let request = ProductDraft::default().to_request(&VariationEditor::new(), ProductStatus::Draft);
        let errors = validate_request(&request);
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["productName"]);
    }

    #[test]
    fn test_pending_reports_missing_fields() {
        let draft = ProductDraft {
            product_name: "Tote".into(),
            price: "abc".into(),
            stock: "1.5".into(),
            ..Default::default()
        };
        let errors = validate_request(&draft.to_request(&VariationEditor::new(), ProductStatus::Pending));

        assert!(errors.contains_key("selectedCategory"));
        assert!(errors.contains_key("productDescription"));
        assert!(errors.contains_key("weight"));
        assert!(errors.contains_key("sku"));
        assert_eq!(errors["price"], "'abc' is not a number");
        assert!(errors.contains_key("stock"));
    }

    #[test]
    fn test_negative_dimensions_rejected_even_for_drafts() {
        let mut draft = simple_draft();
        draft.package_dimensions.width = "-2".into();
        let errors = validate_request(&draft.to_request(&VariationEditor::new(), ProductStatus::Draft));
        assert_eq!(errors["packageDimensions.width"], "Must be zero or greater");
    }

    #[test]
    fn test_variation_rows_need_sales_fields() {
        let mut editor = colour_editor();
        editor.set_row_field(0, RowField::Price, "10");
        editor.set_row_field(0, RowField::Stock, "5");
        editor.set_row_field(0, RowField::Sku, "TOTE-RED");

        let mut draft = simple_draft();
        draft.price.clear();
        let errors = validate_request(&draft.to_request(&editor, ProductStatus::Pending));

        // base fields are not required with variations
        assert!(!errors.contains_key("price"));
        assert!(!errors.contains_key("variationDetails[Red].price"));
        assert!(errors.contains_key("variationDetails[Blue].price"));
        assert!(errors.contains_key("variationDetails[Blue].stock"));
        assert!(errors.contains_key("variationDetails[Blue].sku"));
    }

    #[test]
    fn test_details_must_match_config() {
        let editor = colour_editor();
        let mut request = simple_draft().to_request(&editor, ProductStatus::Pending);
        if let Some(details) = request.variation_details.as_mut() {
            details.0.pop();
        }
        let errors = validate_request(&request);
        assert!(errors.contains_key("variationDetails"));
    }

    #[test]
    fn test_unnamed_group_without_options() {
        let mut editor = VariationEditor::new();
        editor.enable_variations();
        let errors = validate_request(&simple_draft().to_request(&editor, ProductStatus::Pending));

        assert!(errors.contains_key("variationConfig[0].name"));
        assert!(errors.contains_key("variationConfig[0].options"));
        assert!(errors.contains_key("variationDetails"));
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_amount(" 25.50 "), Ok(25.5));
        assert!(parse_amount("-1").is_err());
        assert!(parse_amount("NaN").is_err());
        assert_eq!(parse_quantity("100"), Ok(100));
        assert!(parse_quantity("-3").is_err());
    }
}
