//! Files chosen for upload and the checks made before sending them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// The only content type accepted for upload.
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Multipart field name the backend reads the file from.
pub const UPLOAD_FIELD: &str = "file";

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// A file picked by the user, held in memory until submitted.
#[derive(Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn is_csv(&self) -> bool {
        self.content_type == CSV_CONTENT_TYPE
    }
}

impl fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadFile")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Body of a successful `POST /upload`. The summary is shown verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default)]
    pub summary: Value,
}

/// A summary as indented JSON, the way it is displayed.
pub fn pretty_summary(summary: &Value) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|_| summary.to_string())
}

/// Content type a browser would report for a local file, judged by extension.
pub fn content_type_for_path(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => CSV_CONTENT_TYPE,
        _ => FALLBACK_CONTENT_TYPE,
    }
}
