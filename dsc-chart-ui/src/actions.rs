//! Backend calls started from event handlers.
//!
//! Each action records the user's intent on the selector immediately, runs
//! the request in a spawned task and applies the result when it arrives.
//! Nothing is cancelled or tagged: if two dataset loads overlap, whichever
//! response lands last is what the view shows.

use crate::state::AppState;
use dioxus::prelude::*;
use dsc_client::DatasetClient;
use dsc_core::backend::DatasetBackend;
use log::warn;

fn client(state: &AppState) -> Option<DatasetClient> {
    let client = state.client.peek().clone();
    if client.is_none() {
        warn!("No backend client configured");
    }
    client
}

/// Fetch the dataset directory and replace the known list.
pub fn refresh_datasets(mut state: AppState) {
    let Some(client) = client(&state) else {
        return;
    };
    spawn(async move {
        let result = client.list_datasets().await;
        state.selector.write().apply_dataset_list(result);
        state.loading.set(false);
    });
}

/// Select `name` and load its rows. The empty placeholder entry only clears
/// the selection.
pub fn select_dataset(mut state: AppState, name: String) {
    let Some(id) = state.selector.write().select_dataset(&name) else {
        return;
    };
    let Some(client) = client(&state) else {
        return;
    };
    spawn(async move {
        let result = client.fetch_rows(&id).await;
        state.selector.write().apply_rows(&id, result);
    });
}

/// Submit the chosen file, then refresh the directory if it was accepted.
pub fn upload(mut state: AppState) {
    let Some(client) = client(&state) else {
        return;
    };
    let Some(file) = state.selector.write().begin_upload() else {
        return;
    };
    spawn(async move {
        let result = client.upload(&file).await;
        let refresh = state.selector.write().finish_upload(result);
        if refresh {
            let listing = client.list_datasets().await;
            state.selector.write().apply_dataset_list(listing);
        }
    });
}
