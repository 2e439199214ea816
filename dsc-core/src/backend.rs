//! The seam between selection state and the storage backend.

use crate::dataset::{DatasetId, Record};
use crate::upload::{UploadFile, UploadReceipt};
use thiserror::Error;

/// Failure of a single backend call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("backend returned {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the expected payload
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// The three endpoints the client relies on.
///
/// Futures are not required to be `Send`; the web client runs them on the
/// browser's single thread.
#[allow(async_fn_in_trait)]
pub trait DatasetBackend {
    /// `GET /datasets`
    async fn list_datasets(&self) -> Result<Vec<String>, BackendError>;

    /// `GET /data/{id}`
    async fn fetch_rows(&self, id: &DatasetId) -> Result<Vec<Record>, BackendError>;

    /// `POST /upload`
    async fn upload(&self, file: &UploadFile) -> Result<UploadReceipt, BackendError>;
}
