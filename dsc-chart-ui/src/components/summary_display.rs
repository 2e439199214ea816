//! Upload summary display.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SummaryDisplayProps {
    /// Summary JSON returned by the backend, already pretty-printed
    pub summary: String,
}

/// Shows the summary statistics of an uploaded file verbatim.
#[component]
pub fn SummaryDisplay(props: SummaryDisplayProps) -> Element {
    rsx! {
        div {
            h3 { style: "margin: 12px 0 4px 0; font-size: 16px;", "Summary Statistics" }
            pre {
                style: "background: #F5F5F5; padding: 8px; border-radius: 4px; overflow-x: auto; font-size: 12px;",
                "{props.summary}"
            }
        }
    }
}
