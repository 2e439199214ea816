//! Selector for how cell values are handed to the chart.

use crate::state::AppState;
use dioxus::prelude::*;
use dsc_core::series::SeriesMode;

/// Dropdown switching between numeric parsing and passing values as-is.
#[component]
pub fn SeriesModeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let mode = state.selector.read().mode();

    let on_change = move |evt: Event<FormData>| {
        let mode = match evt.value().as_str() {
            "raw" => SeriesMode::Raw,
            _ => SeriesMode::Numeric,
        };
        state.selector.write().set_mode(mode);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Values: "
                select {
                    onchange: on_change,
                    option {
                        value: "numeric",
                        selected: mode == SeriesMode::Numeric,
                        "Parse as numbers"
                    }
                    option {
                        value: "raw",
                        selected: mode == SeriesMode::Raw,
                        "Use as-is"
                    }
                }
            }
        }
    }
}
