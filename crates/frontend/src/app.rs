use crate::domain::a001_product::ui::details::{
    AddProductForm, FilingSuggestions, ProductFormVm, ProductPreview,
};
use leptos::prelude::*;
use thaw::*;

/// Page coordinator: loads categories once, then lays out the form and
/// the two side panels around a single view model.
#[component]
pub fn App() -> impl IntoView {
    let vm = ProductFormVm::new();
    vm.load_categories();

    view! {
        <ConfigProvider>
            <div class="page">
                <header class="page__header">
                    <h2 class="page__title">"Add New Product"</h2>
                </header>
                {move || {
                    if vm.categories_loading.get() {
                        view! {
                            <div class="page__status">
                                <Spinner />
                                <span>"Loading categories..."</span>
                            </div>
                        }
                        .into_any()
                    } else if let Some(e) = vm.categories_error.get() {
                        view! {
                            <div class="warning-box warning-box--error">
                                <span class="warning-box__icon">"⚠"</span>
                                <span class="warning-box__text">
                                    {format!("Failed to load categories: {}", e)}
                                </span>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="page__columns">
                                <div class="page__column page__column--main">
                                    <AddProductForm vm=vm />
                                </div>
                                <aside class="page__column">
                                    <ProductPreview vm=vm />
                                </aside>
                                <aside class="page__column">
                                    <FilingSuggestions vm=vm />
                                </aside>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </ConfigProvider>
    }
}
