pub mod aggregate;
pub mod editor;
pub mod filing_score;
pub mod group_editor;
pub mod recompute;
pub mod row_editor;
pub mod synthesizer;
pub mod validation;
pub mod variation;

pub use aggregate::{
    CreateProductRequest, CreateProductResponse, FieldErrors, PackageDimensions, ProductDraft,
    ProductErrorResponse, ProductId, ProductRecord, ProductStatus,
};
pub use editor::VariationEditor;
pub use filing_score::{FilingScore, Suggestion};
pub use group_editor::VariationState;
pub use recompute::RecomputeTrigger;
pub use synthesizer::{row_key, synthesize};
pub use validation::validate_request;
pub use variation::{
    RowField, SizeFormat, VariationGroup, VariationGroupId, VariationRow, VariationTable,
};
