//! Sales information section
//!
//! Base price, stock and SKU. Locked while variations are on, since each
//! variation row then carries its own values.

use super::super::view_model::{FormSection, ProductFormVm};
use crate::shared::components::ui::Input;
use leptos::prelude::*;

#[component]
pub fn SalesInfoSection(vm: ProductFormVm) -> impl IntoView {
    let locked = vm.variations_enabled();

    view! {
        <section id=FormSection::SalesInfo.dom_id() class="form-section">
            <h3 class="form-section__title">{FormSection::SalesInfo.title()}</h3>
            <Show when=move || locked.get()>
                <p class="form-section__hint">
                    "Price, stock and SKU are set per variation below."
                </p>
            </Show>
            <div class="form-grid form-grid--3col">
                <Input
                    id="price"
                    label="Price (RM)"
                    input_type="number"
                    step="0.01"
                    min="0"
                    required=true
                    value=vm.price
                    disabled=locked
                    on_input=Callback::new(move |v: String| vm.price.set(v))
                    placeholder="0.00"
                    error=vm.field_error("price")
                />
                <Input
                    id="stock"
                    label="Stock"
                    input_type="number"
                    step="1"
                    min="0"
                    required=true
                    value=vm.stock
                    disabled=locked
                    on_input=Callback::new(move |v: String| vm.stock.set(v))
                    placeholder="0"
                    error=vm.field_error("stock")
                />
                <Input
                    id="sku"
                    label="SKU"
                    required=true
                    value=vm.sku
                    disabled=locked
                    on_input=Callback::new(move |v: String| vm.sku.set(v))
                    error=vm.field_error("sku")
                />
            </div>
        </section>
    }
}
