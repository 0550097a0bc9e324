//! ViewModel for the Add Product form
//!
//! Scalar form fields are individual RwSignals; the whole variation state
//! lives in one `RwSignal<VariationEditor>` so every editor operation is a
//! single update and readers never observe a half-applied change.

use super::model::{self, SubmitOutcome};
use contracts::domain::a001_product::filing_score::{self, FilingScore};
use contracts::domain::a001_product::{
    validate_request, CreateProductResponse, FieldErrors, PackageDimensions, ProductDraft,
    ProductStatus, RowField, SizeFormat, VariationEditor, VariationGroupId,
};
use contracts::domain::a002_category::aggregate::category_name;
use contracts::domain::a002_category::Category;
use leptos::prelude::*;

const SUCCESS_MESSAGE_MS: u32 = 5000;

/// Sections of the form, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSection {
    BasicInfo,
    SalesInfo,
    Variations,
    Shipping,
}

impl FormSection {
    pub fn all() -> [FormSection; 4] {
        [
            FormSection::BasicInfo,
            FormSection::SalesInfo,
            FormSection::Variations,
            FormSection::Shipping,
        ]
    }

    /// DOM id of the section element
    pub fn dom_id(&self) -> &'static str {
        match self {
            FormSection::BasicInfo => "basic-info",
            FormSection::SalesInfo => "sales-info",
            FormSection::Variations => "variations",
            FormSection::Shipping => "shipping",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormSection::BasicInfo => "Basic Information",
            FormSection::SalesInfo => "Sales Information",
            FormSection::Variations => "Product Variations",
            FormSection::Shipping => "Shipping",
        }
    }
}

pub fn success_message(created: &CreateProductResponse) -> String {
    match created.status {
        ProductStatus::Draft => format!("Product saved as draft (id {})", created.product_id),
        ProductStatus::Pending => format!(
            "Product submitted for review (id {})",
            created.product_id
        ),
    }
}

/// ViewModel for the Add Product page
#[derive(Clone, Copy)]
pub struct ProductFormVm {
    // === Form fields ===
    pub product_name: RwSignal<String>,
    pub selected_category: RwSignal<Option<i64>>,
    pub product_description: RwSignal<String>,
    pub brand: RwSignal<String>,
    pub price: RwSignal<String>,
    pub sku: RwSignal<String>,
    pub stock: RwSignal<String>,
    pub weight: RwSignal<String>,
    pub length: RwSignal<String>,
    pub width: RwSignal<String>,
    pub height: RwSignal<String>,

    // === Variations ===
    pub editor: RwSignal<VariationEditor>,

    // === Reference data ===
    pub categories: RwSignal<Vec<Category>>,
    pub categories_loading: RwSignal<bool>,
    pub categories_error: RwSignal<Option<String>>,

    // === UI State ===
    pub active_section: RwSignal<FormSection>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub field_errors: RwSignal<FieldErrors>,
}

impl ProductFormVm {
    pub fn new() -> Self {
        Self {
            product_name: RwSignal::new(String::new()),
            selected_category: RwSignal::new(None),
            product_description: RwSignal::new(String::new()),
            brand: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            sku: RwSignal::new(String::new()),
            stock: RwSignal::new(String::new()),
            weight: RwSignal::new(String::new()),
            length: RwSignal::new(String::new()),
            width: RwSignal::new(String::new()),
            height: RwSignal::new(String::new()),

            editor: RwSignal::new(VariationEditor::new()),

            categories: RwSignal::new(Vec::new()),
            categories_loading: RwSignal::new(true),
            categories_error: RwSignal::new(None),

            active_section: RwSignal::new(FormSection::BasicInfo),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
            field_errors: RwSignal::new(FieldErrors::new()),
        }
    }

    // === Data loading ===

    /// Load categories once (called by the page coordinator on mount)
    pub fn load_categories(&self) {
        let this = *self;
        this.categories_loading.set(true);
        this.categories_error.set(None);

        leptos::task::spawn_local(async move {
            match model::fetch_categories().await {
                Ok(items) => {
                    log::info!("Loaded {} categories", items.len());
                    this.categories.set(items);
                }
                Err(e) => {
                    log::warn!("Category fetch failed: {}", e);
                    this.categories_error.set(Some(e));
                }
            }
            this.categories_loading.set(false);
        });
    }

    // === Derived signals ===

    /// Current scalar fields (tracked)
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            product_name: self.product_name.get(),
            selected_category: self.selected_category.get(),
            product_description: self.product_description.get(),
            brand: self.brand.get(),
            price: self.price.get(),
            sku: self.sku.get(),
            stock: self.stock.get(),
            weight: self.weight.get(),
            package_dimensions: PackageDimensions {
                length: self.length.get(),
                width: self.width.get(),
                height: self.height.get(),
            },
        }
    }

    pub fn filing_score(&self) -> Signal<FilingScore> {
        let this = *self;
        Signal::derive(move || {
            let draft = this.draft();
            this.editor
                .with(|e| filing_score::evaluate(&draft, e.enabled(), e.table()))
        })
    }

    pub fn category_name(&self) -> Signal<String> {
        let selected = self.selected_category;
        let categories = self.categories;
        Signal::derive(move || match selected.get() {
            Some(id) => categories.with(|c| category_name(c, id)),
            None => "Unknown".to_string(),
        })
    }

    pub fn variations_enabled(&self) -> Signal<bool> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|e| e.enabled()))
    }

    /// Validation message for one wire field, if the last submit reported one
    pub fn field_error(&self, field: &str) -> Signal<Option<String>> {
        let field_errors = self.field_errors;
        let field = field.to_string();
        Signal::derive(move || field_errors.with(|errors| errors.get(&field).cloned()))
    }

    // === Field setters ===

    pub fn set_category(&self, value: String) {
        self.selected_category.set(value.parse::<i64>().ok());
    }

    pub fn set_active_section(&self, section: FormSection) {
        self.active_section.set(section);
    }

    // === Variation commands ===

    fn edit(&self, op: impl FnOnce(&mut VariationEditor)) {
        self.editor.update(op);
    }

    /// Position of a group by its stable id; groups shift when one is removed
    fn index_of(&self, id: VariationGroupId) -> Option<usize> {
        self.editor
            .with_untracked(|e| e.groups().iter().position(|g| g.id == id))
    }

    fn edit_group(&self, id: VariationGroupId, op: impl FnOnce(&mut VariationEditor, usize)) {
        if let Some(index) = self.index_of(id) {
            self.edit(|e| op(e, index));
        }
    }

    pub fn toggle_variations(&self) {
        self.edit(|e| e.toggle_variations());
        log::debug!(
            "Variations {}",
            if self.editor.with_untracked(|e| e.enabled()) { "enabled" } else { "disabled" }
        );
    }

    pub fn add_group(&self) {
        self.edit(|e| e.add_group());
        log::debug!(
            "Variation groups: {}",
            self.editor.with_untracked(|e| e.groups().len())
        );
    }

    pub fn remove_group(&self, id: VariationGroupId) {
        self.edit_group(id, |e, i| e.remove_group(i));
        log::debug!(
            "Variation groups: {}",
            self.editor.with_untracked(|e| e.groups().len())
        );
    }

    pub fn set_group_name(&self, id: VariationGroupId, value: String) {
        self.edit_group(id, |e, i| e.set_group_name(i, &value));
    }

    pub fn set_custom_group_name(&self, id: VariationGroupId, text: String) {
        self.edit_group(id, |e, i| e.set_custom_group_name(i, &text));
    }

    pub fn set_size_format(&self, id: VariationGroupId, code: String) {
        if let Some(format) = SizeFormat::from_code(&code) {
            self.edit_group(id, |e, i| e.set_size_format_hint(i, format));
        }
    }

    pub fn set_custom_size_format(&self, id: VariationGroupId, text: String) {
        self.edit_group(id, |e, i| e.set_custom_size_format(i, &text));
    }

    pub fn set_option_scratch(&self, id: VariationGroupId, text: String) {
        self.edit_group(id, |e, i| e.set_option_scratch(i, &text));
    }

    pub fn commit_option(&self, id: VariationGroupId) {
        self.edit_group(id, |e, i| e.commit_option(i));
    }

    pub fn remove_option(&self, id: VariationGroupId, option_index: usize) {
        self.edit_group(id, |e, i| e.remove_option(i, option_index));
    }

    pub fn set_row_field(&self, row_index: usize, field: RowField, value: String) {
        self.edit(|e| e.set_row_field(row_index, field, &value));
    }

    // === Commands ===

    /// Validate locally, then submit with the given status
    pub fn submit(&self, status: ProductStatus) {
        if self.saving.get_untracked() {
            return;
        }

        let draft = untrack(|| self.draft());
        let request = self
            .editor
            .with_untracked(|e| draft.to_request(e, status));

        let errors = validate_request(&request);
        if !errors.is_empty() {
            log::warn!("Submission blocked: {} field error(s)", errors.len());
            self.field_errors.set(errors);
            self.success.set(None);
            self.error
                .set(Some("Please correct the highlighted fields".to_string()));
            return;
        }

        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        this.success.set(None);
        this.field_errors.set(FieldErrors::new());

        leptos::task::spawn_local(async move {
            let outcome = model::submit_product(&request).await;
            this.saving.set(false);

            match outcome {
                SubmitOutcome::Created(created) => {
                    log::info!(
                        "Product {} accepted with status {}",
                        created.product_id,
                        created.status.code()
                    );
                    let message = success_message(&created);
                    this.success.set(Some(message.clone()));
                    gloo_timers::future::TimeoutFuture::new(SUCCESS_MESSAGE_MS).await;
                    // a later submit may have replaced the message
                    if this.success.get_untracked().as_deref() == Some(message.as_str()) {
                        this.success.set(None);
                    }
                }
                SubmitOutcome::Rejected(body) => {
                    log::warn!("Product rejected: {}", body.message);
                    this.field_errors.set(body.field_errors);
                    this.error.set(Some(body.message));
                }
                SubmitOutcome::Failed(message) => {
                    log::warn!("Product submission failed: {}", message);
                    this.error.set(Some(message));
                }
            }
        });
    }
}

impl Default for ProductFormVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_are_unique() {
        let ids: std::collections::HashSet<_> =
            FormSection::all().iter().map(|s| s.dom_id()).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(FormSection::Variations.title(), "Product Variations");
    }

    #[test]
    fn test_success_message_names_status() {
        let created = CreateProductResponse {
            product_id: "p-1".into(),
            status: ProductStatus::Pending,
        };
        assert_eq!(success_message(&created), "Product submitted for review (id p-1)");

        let created = CreateProductResponse {
            product_id: "p-2".into(),
            status: ProductStatus::Draft,
        };
        assert_eq!(success_message(&created), "Product saved as draft (id p-2)");
    }
}
