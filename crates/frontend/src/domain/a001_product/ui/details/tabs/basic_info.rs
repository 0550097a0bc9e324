//! Basic information section
//!
//! Contains: product name, category, description, brand

use super::super::view_model::{FormSection, ProductFormVm};
use crate::shared::components::ui::{Input, Select, Textarea};
use leptos::prelude::*;

#[component]
pub fn BasicInfoSection(vm: ProductFormVm) -> impl IntoView {
    let category_options = Signal::derive(move || {
        vm.categories
            .get()
            .into_iter()
            .map(|c| (c.id.to_string(), c.name))
            .collect::<Vec<_>>()
    });
    let category_value = Signal::derive(move || {
        vm.selected_category
            .get()
            .map(|id| id.to_string())
            .unwrap_or_default()
    });

    view! {
        <section id=FormSection::BasicInfo.dom_id() class="form-section">
            <h3 class="form-section__title">{FormSection::BasicInfo.title()}</h3>

            <Input
                id="productName"
                label="Product Name"
                required=true
                value=vm.product_name
                on_input=Callback::new(move |v: String| vm.product_name.set(v))
                placeholder="Brand + product type + key features"
                error=vm.field_error("productName")
            />

            <Select
                id="selectedCategory"
                label="Category"
                required=true
                value=category_value
                options=category_options
                placeholder="Select category"
                on_change=Callback::new(move |v: String| vm.set_category(v))
                error=vm.field_error("selectedCategory")
            />

            <Textarea
                id="productDescription"
                label="Product Description"
                required=true
                rows=6
                value=vm.product_description
                on_input=Callback::new(move |v: String| vm.product_description.set(v))
                placeholder="Describe material, fit and what makes it stand out"
                error=vm.field_error("productDescription")
            />

            <Input
                id="brand"
                label="Brand"
                value=vm.brand
                on_input=Callback::new(move |v: String| vm.brand.set(v))
                placeholder="No brand"
            />
        </section>
    }
}
