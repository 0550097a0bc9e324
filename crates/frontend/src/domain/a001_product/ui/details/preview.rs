//! Live preview of the listing as buyers would see it

use super::view_model::ProductFormVm;
use contracts::domain::a001_product::VariationTable;
use leptos::prelude::*;

const DESCRIPTION_PREVIEW_CHARS: usize = 150;
const NOT_AVAILABLE: &str = "N/A";

pub fn display_title(name: &str) -> String {
    if name.trim().is_empty() {
        "[Product Title]".to_string()
    } else {
        name.to_string()
    }
}

fn or_na(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

/// Price and stock shown in the preview. With variations the first row
/// stands in for the product.
pub fn price_and_stock(
    has_variations: bool,
    table: &VariationTable,
    price: &str,
    stock: &str,
) -> (String, String) {
    if has_variations {
        match table.first() {
            Some(row) => (or_na(&row.price), or_na(&row.stock)),
            None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
        }
    } else {
        (or_na(price), or_na(stock))
    }
}

pub fn first_variation_label(has_variations: bool, table: &VariationTable) -> Option<String> {
    if !has_variations {
        return None;
    }
    table.first().map(|row| row.display_label())
}

pub fn truncate_description(text: &str) -> String {
    if text.chars().count() > DESCRIPTION_PREVIEW_CHARS {
        let head: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

#[component]
pub fn ProductPreview(vm: ProductFormVm) -> impl IntoView {
    let title = move || display_title(&vm.product_name.get());
    let sales = Signal::derive(move || {
        let price = vm.price.get();
        let stock = vm.stock.get();
        vm.editor
            .with(|e| price_and_stock(e.enabled(), e.table(), &price, &stock))
    });
    let variation = move || vm.editor.with(|e| first_variation_label(e.enabled(), e.table()));
    let category = vm.category_name();
    let description = move || truncate_description(&vm.product_description.get());

    view! {
        <div class="preview">
            <h3 class="preview__heading">"Preview"</h3>
            <div class="preview__card">
                <div class="preview__image">"No image"</div>
                <div class="preview__body">
                    <h4 class="preview__title">{title}</h4>
                    <div class="preview__price">{move || format!("RM {}", sales.get().0)}</div>
                    <div class="preview__meta">{move || format!("Stock: {}", sales.get().1)}</div>
                    {move || variation().map(|label| view! {
                        <div class="preview__meta">{format!("Variation: {}", label)}</div>
                    })}
                    <div class="preview__meta">{move || format!("Category: {}", category.get())}</div>
                    {move || {
                        let brand = vm.brand.get();
                        (!brand.trim().is_empty()).then(|| view! {
                            <div class="preview__meta">{format!("Brand: {}", brand)}</div>
                        })
                    }}
                    <p class="preview__description">{description}</p>
                </div>
            </div>
        </div>
    }
}
