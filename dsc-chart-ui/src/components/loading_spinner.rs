//! Placeholder shown while the dataset directory loads.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading datasets...".to_string())]
    pub label: String,
}

/// Centered grey status line; `label` defaults to the directory message.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "padding: 24px; text-align: center; color: #666;",
            "{props.label}"
        }
    }
}
