//! Add Product UI Module
//!
//! MVVM pattern implementation:
//! - model.rs: API functions (fetch categories, submit product)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: the multi-section form
//! - tabs/: one component per form section
//! - preview.rs, filing_suggestions.rs: read-only side panels

mod filing_suggestions;
mod model;
mod preview;
mod tabs;
mod view;
mod view_model;

pub use filing_suggestions::FilingSuggestions;
pub use model::SubmitOutcome;
pub use preview::ProductPreview;
pub use view::AddProductForm;
pub use view_model::{FormSection, ProductFormVm};
