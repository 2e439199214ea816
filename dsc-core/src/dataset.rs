//! Dataset identifiers, records and the payloads returned by the backend.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One row of a dataset: column name to cell value, in backend key order.
pub type Record = Map<String, Value>;

/// Name of a CSV resource stored by the backend (e.g. `"rainfall.csv"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DatasetId(String);

impl DatasetId {
    /// Build an identifier, rejecting empty or whitespace-only names.
    pub fn parse(name: impl Into<String>) -> Option<DatasetId> {
        let name = name.into();
        if name.trim().is_empty() {
            None
        } else {
            Some(DatasetId(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DatasetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Body of `GET /datasets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetList {
    pub datasets: Vec<String>,
}

/// Body of `GET /data/{datasetId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRows {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default)]
    pub data: Vec<Record>,
}

/// Error body the backend returns alongside a non-success status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Column names of a dataset, taken from the keys of its first row.
///
/// Later rows are not inspected; every row is assumed to share the first
/// row's keys. Returns an empty list for an empty dataset.
pub fn column_set(rows: &[Record]) -> Vec<String> {
    rows.first()
        .map(|first| first.keys().cloned().collect())
        .unwrap_or_default()
}
