//! Chart header component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Number of plotted points, shown under the title when non-zero
    #[props(default = 0)]
    pub point_count: usize,
}

/// Header for the chart section showing title and point count.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if props.point_count > 0 {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.point_count} points, one per row"
                }
            }
        }
    }
}
