use super::super::view_model::{FormSection, ProductFormVm};
use crate::shared::components::ui::Input;
use leptos::prelude::*;

#[component]
pub fn ShippingSection(vm: ProductFormVm) -> impl IntoView {
    view! {
        <section id=FormSection::Shipping.dom_id() class="form-section">
            <h3 class="form-section__title">{FormSection::Shipping.title()}</h3>
            <Input
                id="weight"
                label="Weight (kg)"
                input_type="number"
                step="0.01"
                min="0"
                required=true
                value=vm.weight
                on_input=Callback::new(move |v: String| vm.weight.set(v))
                placeholder="0.00"
                error=vm.field_error("weight")
            />
            <label class="form__label">"Package Dimensions (cm)"</label>
            <div class="form-grid form-grid--3col">
                <Input
                    id="packageLength"
                    input_type="number"
                    min="0"
                    value=vm.length
                    on_input=Callback::new(move |v: String| vm.length.set(v))
                    placeholder="Length"
                    error=vm.field_error("packageDimensions.length")
                />
                <Input
                    id="packageWidth"
                    input_type="number"
                    min="0"
                    value=vm.width
                    on_input=Callback::new(move |v: String| vm.width.set(v))
                    placeholder="Width"
                    error=vm.field_error("packageDimensions.width")
                />
                <Input
                    id="packageHeight"
                    input_type="number"
                    min="0"
                    value=vm.height
                    on_input=Callback::new(move |v: String| vm.height.set(v))
                    placeholder="Height"
                    error=vm.field_error("packageDimensions.height")
                />
            </div>
        </section>
    }
}
