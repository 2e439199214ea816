//! Selection state for the dataset chart view and the flow that drives it.
//!
//! `SelectorState` holds everything the view shows and changes only through
//! synchronous transitions. Network calls happen outside it: a caller issues
//! the request, then applies the result with the matching `apply_*` method.
//! Results are applied in the order they arrive, so a slow dataset load that
//! lands after a newer one overwrites it.
//!
//! `DatasetChartSelector` pairs a state with a `DatasetBackend` for callers
//! that can hold `&mut` across the await (the CLI, tests).

use crate::backend::{BackendError, DatasetBackend};
use crate::dataset::{column_set, DatasetId, Record};
use crate::series::{build_series, Series, SeriesMode};
use crate::upload::{UploadFile, UploadReceipt};
use log::{error, info, warn};
use serde_json::Value;

pub const MSG_FETCH_DATASETS: &str = "Error fetching datasets.";
pub const MSG_FETCH_ROWS: &str = "Error fetching dataset variables.";
pub const MSG_NO_DATA: &str = "No data available in the selected dataset.";
pub const MSG_SELECT_FILE: &str = "Please select a file first.";
pub const MSG_ONLY_CSV: &str = "Only CSV files are allowed.";
pub const MSG_UPLOAD_FAILED: &str = "File upload failed.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectorState {
    datasets: Vec<String>,
    selected_dataset: Option<DatasetId>,
    columns: Vec<String>,
    /// `None` until a dataset with rows has been loaded.
    rows: Option<Vec<Record>>,
    x_column: Option<String>,
    y_column: Option<String>,
    mode: SeriesMode,
    error: Option<String>,
    chosen_file: Option<UploadFile>,
    uploading: bool,
    summary: Option<Value>,
}

impl SelectorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn datasets(&self) -> &[String] {
        &self.datasets
    }

    pub fn selected_dataset(&self) -> Option<&DatasetId> {
        self.selected_dataset.as_ref()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> Option<&[Record]> {
        self.rows.as_deref()
    }

    pub fn x_column(&self) -> Option<&str> {
        self.x_column.as_deref()
    }

    pub fn y_column(&self) -> Option<&str> {
        self.y_column.as_deref()
    }

    pub fn mode(&self) -> SeriesMode {
        self.mode
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn chosen_file(&self) -> Option<&UploadFile> {
        self.chosen_file.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn summary(&self) -> Option<&Value> {
        self.summary.as_ref()
    }

    fn fail(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    // ─── Dataset directory ───

    /// Replace the known datasets with a listing result. On failure the
    /// current list is kept.
    pub fn apply_dataset_list(&mut self, result: Result<Vec<String>, BackendError>) {
        match result {
            Ok(datasets) => {
                info!("Dataset directory holds {} datasets", datasets.len());
                self.datasets = datasets;
                self.error = None;
            }
            Err(e) => {
                error!("Error fetching datasets: {}", e);
                self.fail(MSG_FETCH_DATASETS);
            }
        }
    }

    // ─── Dataset loader ───

    /// Record the user's dataset choice. Returns the identifier to fetch, or
    /// `None` when the placeholder (empty) entry was chosen.
    pub fn select_dataset(&mut self, name: &str) -> Option<DatasetId> {
        self.selected_dataset = DatasetId::parse(name);
        self.selected_dataset.clone()
    }

    /// Apply the rows fetched for `id`.
    ///
    /// Non-empty rows replace the column set and rows wholesale and drop any
    /// X/Y choice that is not a column of the new dataset. An empty dataset
    /// only sets the error; the previously loaded rows stay in place.
    pub fn apply_rows(&mut self, id: &DatasetId, result: Result<Vec<Record>, BackendError>) {
        match result {
            Ok(rows) if rows.is_empty() => {
                warn!("Dataset {} has no rows", id);
                self.fail(MSG_NO_DATA);
            }
            Ok(rows) => {
                let columns = column_set(&rows);
                info!("Loaded {} rows with {} columns from {}", rows.len(), columns.len(), id);
                if self.x_column.as_ref().is_some_and(|x| !columns.contains(x)) {
                    self.x_column = None;
                }
                if self.y_column.as_ref().is_some_and(|y| !columns.contains(y)) {
                    self.y_column = None;
                }
                self.columns = columns;
                self.rows = Some(rows);
                self.error = None;
            }
            Err(e) => {
                error!("Error fetching dataset {}: {}", id, e);
                self.fail(MSG_FETCH_ROWS);
            }
        }
    }

    // ─── Chart series ───

    /// Choose the X column; an empty name unsets it.
    pub fn set_x_column(&mut self, column: &str) {
        self.x_column = (!column.is_empty()).then(|| column.to_string());
    }

    /// Choose the Y column; an empty name unsets it.
    pub fn set_y_column(&mut self, column: &str) {
        self.y_column = (!column.is_empty()).then(|| column.to_string());
    }

    pub fn set_mode(&mut self, mode: SeriesMode) {
        self.mode = mode;
    }

    /// The series for the current selection, recomputed on every call.
    pub fn chart_series(&self) -> Option<Series> {
        let rows = self.rows.as_deref()?;
        build_series(rows, self.x_column.as_deref()?, self.y_column.as_deref()?, self.mode)
    }

    // ─── Upload ───

    /// Hold a file picked by the user. Anything not reported as CSV is
    /// refused here, before any request is made. Allowed while an upload is
    /// in flight.
    pub fn choose_file(&mut self, file: Option<UploadFile>) {
        match file {
            Some(file) if !file.is_csv() => {
                warn!("Refusing {} with content type '{}'", file.name, file.content_type);
                self.chosen_file = None;
                self.fail(MSG_ONLY_CSV);
            }
            file => {
                self.chosen_file = file;
                self.error = None;
            }
        }
    }

    /// Start submitting the chosen file. Returns the file to send, or `None`
    /// if an upload is already running or nothing was chosen.
    pub fn begin_upload(&mut self) -> Option<UploadFile> {
        if self.uploading {
            return None;
        }
        match self.chosen_file.clone() {
            Some(file) => {
                self.uploading = true;
                Some(file)
            }
            None => {
                self.fail(MSG_SELECT_FILE);
                None
            }
        }
    }

    /// Finish an upload. Returns `true` when it succeeded and the dataset
    /// directory should be refreshed.
    pub fn finish_upload(&mut self, result: Result<UploadReceipt, BackendError>) -> bool {
        self.uploading = false;
        match result {
            Ok(receipt) => {
                info!("Uploaded {}", receipt.filename.as_deref().unwrap_or("file"));
                self.summary = Some(receipt.summary);
                self.error = None;
                true
            }
            Err(e) => {
                error!("File upload failed: {}", e);
                self.fail(MSG_UPLOAD_FAILED);
                false
            }
        }
    }
}

/// Selection state driven directly by a backend.
pub struct DatasetChartSelector<B> {
    backend: B,
    state: SelectorState,
}

impl<B: DatasetBackend> DatasetChartSelector<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: SelectorState::new(),
        }
    }

    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SelectorState {
        &mut self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn refresh_datasets(&mut self) {
        let result = self.backend.list_datasets().await;
        self.state.apply_dataset_list(result);
    }

    /// Select a dataset and load its rows.
    pub async fn select_dataset(&mut self, name: &str) {
        if let Some(id) = self.state.select_dataset(name) {
            let result = self.backend.fetch_rows(&id).await;
            self.state.apply_rows(&id, result);
        }
    }

    /// Submit the chosen file; on success refresh the dataset directory.
    /// Returns whether the upload succeeded.
    pub async fn upload(&mut self) -> bool {
        let Some(file) = self.state.begin_upload() else {
            return false;
        };
        let result = self.backend.upload(&file).await;
        let uploaded = self.state.finish_upload(result);
        if uploaded {
            self.refresh_datasets().await;
        }
        uploaded
    }
}
