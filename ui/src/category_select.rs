use api::Category;
use dioxus::prelude::*;

/// Dropdown over the loaded categories. The empty option maps to `None`
/// and carries the caller's placeholder ("All categories", "Select
/// category", ...).
#[component]
pub fn CategorySelect(
    categories: Vec<Category>,
    value: Option<i64>,
    #[props(default = "All categories".to_string())] placeholder: String,
    onchange: EventHandler<Option<i64>>,
) -> Element {
    let current = value.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        select {
            class: "category-select",
            value: "{current}",
            onchange: move |evt| onchange.call(evt.value().parse::<i64>().ok()),
            option { value: "", "{placeholder}" }
            for category in &categories {
                option {
                    key: "{category.id}",
                    value: "{category.id}",
                    "{category.name}"
                }
            }
        }
    }
}
