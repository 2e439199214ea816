//! Dropdown selector for choosing a dataset.

use crate::actions;
use crate::state::AppState;
use dioxus::prelude::*;

/// Dataset dropdown selector.
/// Reads the directory from AppState and loads the chosen dataset on change.
#[component]
pub fn DatasetSelector() -> Element {
    let state = use_context::<AppState>();
    let selector = state.selector.read();
    let datasets = selector.datasets().to_vec();
    let selected = selector
        .selected_dataset()
        .map(|id| id.to_string())
        .unwrap_or_default();
    drop(selector);

    let on_change = move |evt: Event<FormData>| {
        actions::select_dataset(state, evt.value());
    };

    if datasets.is_empty() {
        return rsx! {
            p { style: "color: #666;", "No datasets available" }
        };
    }

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "dataset-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Dataset: "
            }
            select {
                id: "dataset-select",
                onchange: on_change,
                option { value: "", selected: selected.is_empty(), "Select a dataset" }
                for dataset in datasets.iter() {
                    option {
                        value: "{dataset}",
                        selected: *dataset == selected,
                        "{dataset}"
                    }
                }
            }
        }
    }
}
