use super::view_model::ProductFormVm;
use leptos::prelude::*;

const TIPS: [&str; 3] = [
    "Use a clear title with brand, product type and key feature.",
    "Bright photos on a plain background convert better.",
    "Mention size, material and care details in the description.",
];

#[component]
pub fn FilingSuggestions(vm: ProductFormVm) -> impl IntoView {
    let result = vm.filing_score();

    view! {
        <div class="suggestions">
            <h3 class="suggestions__heading">"Filing Suggestions"</h3>
            <div class="suggestions__score">
                <span>"Listing quality"</span>
                <strong>{move || format!("{}%", result.get().score)}</strong>
            </div>
            <div class="suggestions__bar">
                <div
                    class="suggestions__bar-fill"
                    style=move || format!("width: {}%;", result.get().score)
                ></div>
            </div>
            <ul class="suggestions__list">
                {move || {
                    result
                        .get()
                        .suggestions
                        .into_iter()
                        .map(|s| {
                            let class = if s.is_complete {
                                "suggestions__item suggestions__item--done"
                            } else {
                                "suggestions__item"
                            };
                            view! {
                                <li class=class>
                                    <span class="suggestions__mark">
                                        {if s.is_complete { "✓" } else { "○" }}
                                    </span>
                                    {s.text}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <div class="suggestions__tips">
                <h4>"Tips"</h4>
                <ul>
                    {TIPS.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
