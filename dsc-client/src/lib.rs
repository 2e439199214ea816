//! `reqwest` client for the dataset backend.
//!
//! Talks to three endpoints relative to a configured base URL:
//!
//! - `GET /datasets` → `{ "datasets": [..] }`
//! - `GET /data/{id}` → `{ "data": [ {column: value, ..}, .. ] }`
//! - `POST /upload` (multipart, field `file`) → `{ "summary": .. }`
//!
//! Works natively and in the browser (`reqwest` uses `fetch` on `wasm32`).

pub mod config;

use config::ClientConfig;
use dsc_core::backend::{BackendError, DatasetBackend};
use dsc_core::dataset::{DatasetId, DatasetList, DatasetRows, ErrorBody, Record};
use dsc_core::upload::{UploadFile, UploadReceipt, UPLOAD_FIELD};
use log::info;
use reqwest::multipart::{Form, Part};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

/// HTTP implementation of [`DatasetBackend`]. Cheap to clone.
#[derive(Debug, Clone)]
pub struct DatasetClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DatasetClient {
    pub fn new(config: &ClientConfig) -> Result<Self, BackendError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            BackendError::Transport(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::Transport(format!(
                "base URL '{}' cannot hold a path",
                config.base_url
            )));
        }

        #[allow(unused_mut)]
        let mut builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(transport)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `segments` appended, each percent-encoded as one segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

fn transport(e: reqwest::Error) -> BackendError {
    BackendError::Transport(e.to_string())
}

/// Decode a JSON body, turning non-success statuses into `BackendError::Status`
/// with the backend's `{"error": ..}` message when it sent one.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.json::<ErrorBody>().await.ok().map(|body| body.error);
        return Err(BackendError::Status {
            status: status.as_u16(),
            message,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| BackendError::Decode(e.to_string()))
}

impl DatasetBackend for DatasetClient {
    async fn list_datasets(&self) -> Result<Vec<String>, BackendError> {
        let url = self.endpoint(&["datasets"]);
        info!("GET {}", url);
        let response = self.http.get(url).send().await.map_err(transport)?;
        let list: DatasetList = decode(response).await?;
        Ok(list.datasets)
    }

    async fn fetch_rows(&self, id: &DatasetId) -> Result<Vec<Record>, BackendError> {
        let url = self.endpoint(&["data", id.as_str()]);
        info!("GET {}", url);
        let response = self.http.get(url).send().await.map_err(transport)?;
        let rows: DatasetRows = decode(response).await?;
        Ok(rows.data)
    }

    async fn upload(&self, file: &UploadFile) -> Result<UploadReceipt, BackendError> {
        let url = self.endpoint(&["upload"]);
        info!("POST {} ({}, {} bytes)", url, file.name, file.bytes.len());
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.content_type)
            .map_err(transport)?;
        let form = Form::new().part(UPLOAD_FIELD, part);
        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }
}
