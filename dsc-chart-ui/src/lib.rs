//! Dioxus components and D3.js bridge for the dataset chart client.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js line renderer via `js_sys::eval()`
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `actions`: backend calls spawned from event handlers
//! - `file_input`: reading the picked file out of an `<input type="file">`
//! - `components`: reusable RSX components (selectors, upload form, etc.)

pub mod actions;
pub mod components;
pub mod file_input;
pub mod js_bridge;
pub mod state;
