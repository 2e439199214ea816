//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use dsc_client::DatasetClient;
use dsc_core::selector::SelectorState;

/// Which page of the client is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Plot,
    Upload,
}

/// Shared application state for the dataset chart client.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Backend client (None until configured on mount)
    pub client: Signal<Option<DatasetClient>>,
    /// Datasets, selection, rows, upload progress and the error slot
    pub selector: Signal<SelectorState>,
    /// Whether the first dataset listing is still outstanding
    pub loading: Signal<bool>,
    /// Configuration problem that prevents talking to the backend at all
    pub config_error: Signal<Option<String>>,
    pub view: Signal<View>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            client: Signal::new(None),
            selector: Signal::new(SelectorState::new()),
            loading: Signal::new(true),
            config_error: Signal::new(None),
            view: Signal::new(View::Plot),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
