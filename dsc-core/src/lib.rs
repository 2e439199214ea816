//! Core types for the dataset chart client.
//!
//! This crate provides:
//! - `dataset`: dataset identifiers, records and the backend wire payloads
//! - `series`: derivation of a chart-ready X/Y series from loaded rows
//! - `upload`: client-side checks on a file chosen for upload
//! - `backend`: the `DatasetBackend` seam implemented by the HTTP client
//! - `selector`: selection state and the async flow that drives it
//!
//! Nothing here performs I/O, so the crate builds for both native targets
//! and `wasm32-unknown-unknown`.

pub mod backend;
pub mod dataset;
pub mod selector;
pub mod series;
pub mod upload;
