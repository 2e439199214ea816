//! Dataset Chart Explorer
//!
//! Single-page client for a CSV storage backend. Two views:
//!
//! - Plot: pick a stored dataset, then an X and a Y column; the rows are
//!   drawn as one D3.js line, one point per row in backend order.
//! - Upload: send a CSV file to the backend and show the summary statistics
//!   it returns. A successful upload refreshes the dataset list.
//!
//! Data flow:
//! 1. On mount: build the HTTP client from the compiled-in base URL, load
//!    the chart script and fetch the dataset directory.
//! 2. On dataset change: fetch its rows and replace the column set.
//! 3. Whenever the selection, rows or value mode change: rebuild the series
//!    and re-render it, or clear the chart if the selection is incomplete.

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info, Level};
use dsc_chart_ui::actions;
use dsc_chart_ui::components::{
    ChartContainer, ChartHeader, DatasetSelector, ErrorDisplay, FileUpload, LoadingSpinner,
    SeriesModeSelector, VariableSelector,
};
use dsc_chart_ui::js_bridge;
use dsc_chart_ui::state::{AppState, View};
use dsc_client::config::ClientConfig;
use dsc_client::DatasetClient;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "dataset-chart";

const CHART_HEIGHT: u32 = 420;

const D3_SRC: &str = "https://cdn.jsdelivr.net/npm/d3@7";

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dataset-explorer-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect: configure the client and load the directory once on mount ───
    use_effect(move || {
        let config = ClientConfig::compiled();
        match DatasetClient::new(&config) {
            Ok(client) => {
                info!("Using backend at {}", client.base_url());
                state.client.set(Some(client));
                js_bridge::init_charts();
                actions::refresh_datasets(state);
            }
            Err(e) => {
                error!("Invalid backend configuration: {}", e);
                state.config_error.set(Some(e.to_string()));
                state.loading.set(false);
            }
        }
    });

    let view = (state.view)();

    rsx! {
        document::Script { src: D3_SRC.to_string() }
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            NavBar {}

            if let Some(err) = state.config_error.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if let Some(err) = state.selector.read().error() {
                ErrorDisplay { message: err.to_string() }
            }

            match view {
                View::Plot => rsx! { PlotView {} },
                View::Upload => rsx! { FileUpload {} },
            }
        }
    }
}

/// Switches between the plot and upload views.
#[component]
fn NavBar() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.view)();

    let tab_style = |active: bool| {
        if active {
            "padding: 6px 12px; border: none; border-bottom: 2px solid #2196F3; background: none; font-weight: bold; cursor: pointer;"
        } else {
            "padding: 6px 12px; border: none; border-bottom: 2px solid transparent; background: none; cursor: pointer;"
        }
    };

    rsx! {
        nav {
            style: "display: flex; gap: 4px; margin-bottom: 12px; border-bottom: 1px solid #e0e0e0;",
            button {
                style: tab_style(current == View::Plot),
                onclick: move |_| state.view.set(View::Plot),
                "Plot"
            }
            button {
                style: tab_style(current == View::Upload),
                onclick: move |_| state.view.set(View::Upload),
                "Upload"
            }
        }
    }
}

/// Dataset and column pickers with the chart below them.
#[component]
fn PlotView() -> Element {
    let state = use_context::<AppState>();

    // ─── Effect: rebuild and render the series ───
    // Re-runs whenever the selector changes, and on every mount of this view
    // so the chart is redrawn after switching back from the upload view.
    use_effect(move || {
        let series = state.selector.read().chart_series();
        match series {
            Some(series) => js_bridge::render_series_chart(CHART_CONTAINER_ID, &series, CHART_HEIGHT),
            None => js_bridge::destroy_chart(CHART_CONTAINER_ID),
        }
    });

    let series = state.selector.read().chart_series();
    let has_series = series.is_some();

    rsx! {
        h2 { style: "margin: 0 0 8px 0; font-size: 18px;", "Select a Dataset and Variables to Plot" }

        if *state.loading.read() {
            LoadingSpinner {}
        } else {
            DatasetSelector {}
            VariableSelector {}
            SeriesModeSelector {}
        }

        if let Some(series) = series {
            ChartHeader {
                title: series.label().to_string(),
                point_count: series.len(),
            }
        }

        ChartContainer {
            id: CHART_CONTAINER_ID.to_string(),
            has_series,
            min_height: CHART_HEIGHT,
        }
    }
}
