//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3 renders into
    pub id: String,
    /// Whether a series is available; shows a hint instead when it is not
    #[props(default = false)]
    pub has_series: bool,
    #[props(default = 400)]
    pub min_height: u32,
}

/// Target div for the D3.js line chart.
///
/// The div is always mounted so a pending render can find it; the hint is
/// drawn beside it while no X/Y pair is chosen.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let height = if props.has_series { props.min_height } else { 0 };

    rsx! {
        if !props.has_series {
            p {
                style: "color: #888; font-size: 13px;",
                "Choose a dataset and both variables to draw the chart."
            }
        }
        div {
            id: "{props.id}",
            style: "width: 100%; min-height: {height}px;",
        }
    }
}
