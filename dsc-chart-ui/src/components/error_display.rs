//! Inline error line.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// The single error slot, shown as red inline text. A newer failure simply
/// replaces the message; the rest of the page stays usable.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        p {
            role: "alert",
            style: "margin: 8px 0; color: #C62828;",
            "{props.message}"
        }
    }
}
