//! CSV upload form.

use crate::actions;
use crate::components::SummaryDisplay;
use crate::file_input::read_picked_file;
use crate::state::AppState;
use dioxus::prelude::*;
use dsc_core::upload::pretty_summary;

/// DOM id of the file input the picked file is read from.
pub const FILE_INPUT_ID: &str = "csv-file-input";

/// File picker plus upload button. The button is disabled while an upload
/// is in flight; picking another file is not.
#[component]
pub fn FileUpload() -> Element {
    let mut state = use_context::<AppState>();
    let selector = state.selector.read();
    let uploading = selector.is_uploading();
    let summary = selector.summary().map(pretty_summary);
    drop(selector);

    let on_file_change = move |_evt: Event<FormData>| {
        spawn(async move {
            let picked = read_picked_file(FILE_INPUT_ID).await;
            state.selector.write().choose_file(picked);
        });
    };

    let on_upload = move |_evt: Event<MouseData>| {
        actions::upload(state);
    };

    rsx! {
        div {
            h2 { style: "margin: 0 0 8px 0; font-size: 18px;", "Upload CSV File" }
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                input {
                    id: FILE_INPUT_ID,
                    r#type: "file",
                    accept: ".csv,text/csv",
                    onchange: on_file_change,
                }
                button {
                    disabled: uploading,
                    onclick: on_upload,
                    if uploading { "Uploading..." } else { "Upload" }
                }
            }
            if let Some(summary) = summary {
                SummaryDisplay { summary }
            }
        }
    }
}
