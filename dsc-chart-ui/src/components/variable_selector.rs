//! X/Y column selectors for the loaded dataset.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Axis {
    X,
    Y,
}

#[derive(Props, Clone, PartialEq)]
struct AxisSelectProps {
    axis: Axis,
    columns: Vec<String>,
    selected: String,
}

#[component]
fn AxisSelect(props: AxisSelectProps) -> Element {
    let mut state = use_context::<AppState>();
    let axis = props.axis;
    let (caption, placeholder) = match axis {
        Axis::X => ("X-axis: ", "Select X Variable"),
        Axis::Y => ("Y-axis: ", "Select Y Variable"),
    };

    let on_change = move |evt: Event<FormData>| {
        let column = evt.value();
        let mut selector = state.selector.write();
        match axis {
            Axis::X => selector.set_x_column(&column),
            Axis::Y => selector.set_y_column(&column),
        }
    };

    rsx! {
        label {
            style: "font-weight: bold;",
            "{caption}"
            select {
                onchange: on_change,
                option { value: "", selected: props.selected.is_empty(), "{placeholder}" }
                for column in props.columns.iter() {
                    option {
                        value: "{column}",
                        selected: *column == props.selected,
                        "{column}"
                    }
                }
            }
        }
    }
}

/// Column pickers for both axes. Renders nothing until a dataset with rows
/// has been loaded.
#[component]
pub fn VariableSelector() -> Element {
    let state = use_context::<AppState>();
    let selector = state.selector.read();
    let columns = selector.columns().to_vec();
    let x = selector.x_column().unwrap_or_default().to_string();
    let y = selector.y_column().unwrap_or_default().to_string();
    drop(selector);

    if columns.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "margin: 8px 0;",
            h3 { style: "margin: 0 0 4px 0; font-size: 14px;", "Select Variables" }
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                AxisSelect { axis: Axis::X, columns: columns.clone(), selected: x }
                AxisSelect { axis: Axis::Y, columns: columns, selected: y }
            }
        }
    }
}
