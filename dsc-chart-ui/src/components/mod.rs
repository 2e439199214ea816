//! Reusable Dioxus RSX components for the dataset chart client.

mod chart_container;
mod chart_header;
mod dataset_selector;
mod error_display;
mod file_upload;
mod loading_spinner;
mod series_mode_selector;
mod summary_display;
mod variable_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use dataset_selector::DatasetSelector;
pub use error_display::ErrorDisplay;
pub use file_upload::{FileUpload, FILE_INPUT_ID};
pub use loading_spinner::LoadingSpinner;
pub use series_mode_selector::SeriesModeSelector;
pub use summary_display::SummaryDisplay;
pub use variable_selector::VariableSelector;
