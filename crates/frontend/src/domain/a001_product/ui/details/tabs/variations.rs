//! Product variations section
//!
//! Groups are rendered keyed by their stable id so typing into one group
//! does not rebuild the others. Commands resolve the current index from
//! the id at the moment they run.

use super::super::view_model::{FormSection, ProductFormVm};
use crate::shared::components::ui::{Input, RadioGroup, Select};
use contracts::domain::a001_product::variation::{CUSTOM_NAME_SENTINEL, PRESET_GROUP_NAMES};
use contracts::domain::a001_product::{RowField, SizeFormat, VariationGroup, VariationGroupId};
use leptos::prelude::*;

fn group_name_options() -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = PRESET_GROUP_NAMES
        .iter()
        .map(|name| (name.to_string(), name.to_string()))
        .collect();
    options.push((CUSTOM_NAME_SENTINEL.to_string(), "Custom...".to_string()));
    options
}

fn size_format_options() -> Vec<(String, String)> {
    SizeFormat::all()
        .into_iter()
        .map(|f| (f.code().to_string(), f.display_name().to_string()))
        .collect()
}

#[component]
pub fn VariationsSection(vm: ProductFormVm) -> impl IntoView {
    let enabled = vm.variations_enabled();
    let group_ids = move || {
        vm.editor
            .with(|e| e.groups().iter().map(|g| g.id).collect::<Vec<_>>())
    };
    let can_add = move || vm.editor.with(|e| e.can_add_group());
    let next_number = move || vm.editor.with(|e| e.groups().len() + 1);
    let config_error = vm.field_error("variationConfig");

    view! {
        <section id=FormSection::Variations.dom_id() class="form-section">
            <div class="form-section__header">
                <h3 class="form-section__title">{FormSection::Variations.title()}</h3>
                <label class="switch">
                    <input
                        type="checkbox"
                        class="switch__input"
                        prop:checked=move || enabled.get()
                        on:change=move |_| vm.toggle_variations()
                    />
                    <span class="switch__label">"Enable variations"</span>
                </label>
            </div>

            <Show
                when=move || enabled.get()
                fallback=|| view! {
                    <p class="form-section__hint">
                        "Enable variations if this product comes in options such as color or size."
                    </p>
                }
            >
                {move || config_error.get().map(|e| view! { <span class="form__error">{e}</span> })}
                <For
                    each=group_ids
                    key=|id| *id
                    children=move |id| view! { <GroupCard vm=vm id=id /> }
                />
                <Show when=can_add>
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| vm.add_group()
                    >
                        {move || format!("+ Add Variation {}", next_number())}
                    </button>
                </Show>
                <VariationTableEditor vm=vm />
            </Show>
        </section>
    }
}

#[component]
fn GroupCard(vm: ProductFormVm, id: VariationGroupId) -> impl IntoView {
    let group = Memo::new(move |_| {
        vm.editor
            .with(|e| e.groups().iter().find(|g| g.id == id).cloned())
    });
    let position = Memo::new(move |_| {
        vm.editor
            .with(|e| e.groups().iter().position(|g| g.id == id).unwrap_or_default())
    });

    let text = move |read: fn(&VariationGroup) -> String| {
        Signal::derive(move || group.with(|g| g.as_ref().map(read).unwrap_or_default()))
    };
    let flag = move |read: fn(&VariationGroup) -> bool| {
        move || group.with(|g| g.as_ref().is_some_and(read))
    };
    let error_at = move |suffix: &'static str| {
        Signal::derive(move || {
            let key = format!("variationConfig[{}].{}", position.get(), suffix);
            vm.field_errors.with(|errors| errors.get(&key).cloned())
        })
    };

    let select_value = text(|g| g.select_value());
    let custom_name = text(|g| g.name.clone());
    let size_format = text(|g| g.size_format.map(|f| f.code().to_string()).unwrap_or_default());
    let custom_size_format = text(|g| g.custom_size_format.clone());
    let option_input = text(|g| g.option_input.clone());
    let options = Signal::derive(move || {
        group.with(|g| g.as_ref().map(|g| g.options.clone()).unwrap_or_default())
    });

    let show_custom = flag(|g| g.show_custom);
    let is_size = flag(|g| g.is_size());
    let needs_custom_format = flag(|g| g.size_format.is_some_and(|f| f.requires_custom_text()));
    let accepts_options = flag(|g| g.accepts_options());

    view! {
        <div class="variation-group">
            <div class="variation-group__header">
                <span class="variation-group__title">
                    {move || format!("Variation {}", position.get() + 1)}
                </span>
                <button
                    type="button"
                    class="button button--ghost button--small"
                    on:click=move |_| vm.remove_group(id)
                >
                    "Remove"
                </button>
            </div>

            <Select
                label="Name"
                value=select_value
                options=group_name_options()
                placeholder="Select a variation"
                on_change=Callback::new(move |v: String| vm.set_group_name(id, v))
                error=error_at("name")
            />

            <Show when=show_custom>
                <Input
                    value=custom_name
                    placeholder="Enter variation name, e.g. Material"
                    on_input=Callback::new(move |v: String| vm.set_custom_group_name(id, v))
                />
            </Show>

            <Show when=is_size>
                <RadioGroup
                    label="Size format"
                    name=format!("size-format-{}", id.value())
                    value=size_format
                    options=size_format_options()
                    on_change=Callback::new(move |v: String| vm.set_size_format(id, v))
                />
                <Show when=needs_custom_format>
                    <Input
                        value=custom_size_format
                        placeholder="Describe the size format, e.g. US"
                        on_input=Callback::new(move |v: String| vm.set_custom_size_format(id, v))
                    />
                </Show>
            </Show>

            <Show
                when=accepts_options
                fallback=|| view! {
                    <p class="form-section__hint">"Choose a size format to add options."</p>
                }
            >
                <div class="chips">
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(option_index, option)| view! {
                                <span class="chip">
                                    {option}
                                    <button
                                        type="button"
                                        class="chip__remove"
                                        on:click=move |_| vm.remove_option(id, option_index)
                                    >
                                        "×"
                                    </button>
                                </span>
                            })
                            .collect_view()
                    }}
                </div>
                <Input
                    value=option_input
                    placeholder="Type an option and press Enter"
                    on_input=Callback::new(move |v: String| vm.set_option_scratch(id, v))
                    on_keydown=Callback::new(move |key: String| {
                        if key == "Enter" {
                            vm.commit_option(id);
                        }
                    })
                    error=error_at("options")
                />
            </Show>
        </div>
    }
}

#[component]
fn VariationTableEditor(vm: ProductFormVm) -> impl IntoView {
    let headers = move || {
        vm.editor.with(|e| {
            e.groups()
                .iter()
                .map(|g| g.header_label().to_string())
                .collect::<Vec<_>>()
        })
    };
    let rows = move || {
        vm.editor.with(|e| {
            e.table()
                .iter()
                .enumerate()
                .map(|(i, r)| (i, r.row_key.clone(), r.option_labels.clone()))
                .collect::<Vec<_>>()
        })
    };
    let has_rows = move || vm.editor.with(|e| !e.table().is_empty());
    let details_error = vm.field_error("variationDetails");

    view! {
        <div class="variation-table">
            {move || details_error.get().map(|e| view! { <span class="form__error">{e}</span> })}
            <Show
                when=has_rows
                fallback=|| view! {
                    <p class="form-section__hint">
                        "Add options to every variation to list the combinations."
                    </p>
                }
            >
                <table class="table">
                    <thead>
                        <tr>
                            {move || headers().into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}
                            <th>"Price (RM)"</th>
                            <th>"Stock"</th>
                            <th>"SKU"</th>
                            <th>"Image URL"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|row| row.clone()
                            children=move |(index, row_key, labels)| view! {
                                <VariationRowEditor vm=vm index=index row_key=row_key labels=labels />
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
fn VariationRowEditor(
    vm: ProductFormVm,
    index: usize,
    row_key: String,
    labels: Vec<String>,
) -> impl IntoView {
    let cell = move |field: RowField| {
        Signal::derive(move || {
            vm.editor
                .with(|e| e.table().get(index).map(|r| r.field(field)).unwrap_or_default())
        })
    };
    let on_cell = move |field: RowField| {
        Callback::new(move |v: String| vm.set_row_field(index, field, v))
    };
    let error = |field: RowField| {
        let key = format!("variationDetails[{}].{}", row_key, field.code());
        Signal::derive(move || vm.field_errors.with(|errors| errors.get(&key).cloned()))
    };

    view! {
        <tr>
            {labels.into_iter().map(|l| view! { <td>{l}</td> }).collect_view()}
            <td>
                <Input
                    input_type="number"
                    step="0.01"
                    min="0"
                    placeholder="0.00"
                    value=cell(RowField::Price)
                    on_input=on_cell(RowField::Price)
                    error=error(RowField::Price)
                />
            </td>
            <td>
                <Input
                    input_type="number"
                    step="1"
                    min="0"
                    placeholder="0"
                    value=cell(RowField::Stock)
                    on_input=on_cell(RowField::Stock)
                    error=error(RowField::Stock)
                />
            </td>
            <td>
                <Input
                    value=cell(RowField::Sku)
                    on_input=on_cell(RowField::Sku)
                    error=error(RowField::Sku)
                />
            </td>
            <td>
                <Input
                    input_type="url"
                    placeholder="https://"
                    value=cell(RowField::Image)
                    on_input=on_cell(RowField::Image)
                />
            </td>
        </tr>
    }
}
