//! Filing score
//!
//! Advisory checklist shown next to the product form. Nothing here blocks
//! submission; it only tells the seller how complete the listing looks.

use super::aggregate::ProductDraft;
use super::variation::{VariationRow, VariationTable};

pub const MIN_NAME_CHARS: usize = 10;
pub const MIN_DESCRIPTION_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub id: &'static str,
    pub text: &'static str,
    pub is_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingScore {
    pub suggestions: Vec<Suggestion>,
    /// Whole percent, 0..=100
    pub score: u8,
}

impl FilingScore {
    pub fn completed(&self) -> usize {
        self.suggestions.iter().filter(|s| s.is_complete).count()
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn longer_than(value: &str, min: usize) -> bool {
    value.trim().chars().count() > min
}

/// With variations every row must have the field, otherwise the base field
fn sales_field_set(
    has_variations: bool,
    table: &VariationTable,
    base: &str,
    pick: fn(&VariationRow) -> &str,
) -> bool {
    if has_variations {
        !table.is_empty() && table.iter().all(|row| filled(pick(row)))
    } else {
        filled(base)
    }
}

pub fn evaluate(draft: &ProductDraft, has_variations: bool, table: &VariationTable) -> FilingScore {
    let suggestions = vec![
        Suggestion {
            id: "name",
            text: "Product Name added (min 10 chars)",
            is_complete: longer_than(&draft.product_name, MIN_NAME_CHARS),
        },
        Suggestion {
            id: "category",
            text: "Category selected",
            is_complete: draft.selected_category.is_some(),
        },
        Suggestion {
            id: "description",
            text: "Description added (min 50 chars)",
            is_complete: longer_than(&draft.product_description, MIN_DESCRIPTION_CHARS),
        },
        Suggestion {
            id: "price",
            text: "Price is set",
            is_complete: sales_field_set(has_variations, table, &draft.price, |r| r.price.as_str()),
        },
        Suggestion {
            id: "sku",
            text: "SKU is set",
            is_complete: sales_field_set(has_variations, table, &draft.sku, |r| r.sku.as_str()),
        },
        Suggestion {
            id: "stock",
            text: "Stock is set",
            is_complete: sales_field_set(has_variations, table, &draft.stock, |r| r.stock.as_str()),
        },
        Suggestion {
            id: "weight",
            text: "Weight is set",
            is_complete: filled(&draft.weight),
        },
        Suggestion {
            id: "dimensions",
            text: "Package Dimensions are set",
            is_complete: draft.package_dimensions.is_complete(),
        },
        // uploads are not part of the form yet
        Suggestion {
            id: "images",
            text: "Add at least 3 images",
            is_complete: false,
        },
        Suggestion {
            id: "video",
            text: "Add video",
            is_complete: false,
        },
    ];

    let total = suggestions.len();
    let done = suggestions.iter().filter(|s| s.is_complete).count();
    let score = if total > 0 {
        ((done as f64 / total as f64) * 100.0).round() as u8
    } else {
        0
    };

    FilingScore { suggestions, score }
}
