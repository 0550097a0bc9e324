use super::tabs::{BasicInfoSection, SalesInfoSection, ShippingSection, VariationsSection};
use super::view_model::{FormSection, ProductFormVm};
use contracts::domain::a001_product::ProductStatus;
use leptos::prelude::*;
use thaw::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

fn scroll_to_section(section: FormSection) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.dom_id()))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn AddProductForm(vm: ProductFormVm) -> impl IntoView {
    let is_saving = Signal::derive(move || vm.saving.get());

    view! {
        <div class="product-form">
            <nav class="detail-tabs">
                {FormSection::all()
                    .into_iter()
                    .map(|section| view! {
                        <button
                            type="button"
                            class=move || if vm.active_section.get() == section {
                                "detail-tabs__item detail-tabs__item--active"
                            } else {
                                "detail-tabs__item"
                            }
                            on:click=move |_| {
                                vm.set_active_section(section);
                                scroll_to_section(section);
                            }
                        >
                            {section.title()}
                        </button>
                    })
                    .collect_view()}
            </nav>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            {move || vm.success.get().map(|s| view! {
                <div class="warning-box warning-box--success">
                    <span class="warning-box__icon">"✓"</span>
                    <span class="warning-box__text">{s}</span>
                </div>
            })}

            <BasicInfoSection vm=vm />
            <SalesInfoSection vm=vm />
            <VariationsSection vm=vm />
            <ShippingSection vm=vm />

            <div class="product-form__actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=is_saving
                    on_click=move |_| vm.submit(ProductStatus::Draft)
                >
                    "Save as Draft"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=is_saving
                    on_click=move |_| vm.submit(ProductStatus::Pending)
                >
                    {move || if is_saving.get() { "Saving..." } else { "Save and Publish" }}
                </Button>
            </div>
        </div>
    }
}
