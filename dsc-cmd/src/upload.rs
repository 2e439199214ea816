//! Uploading a local CSV file.

use crate::check;
use anyhow::Context;
use dsc_core::backend::DatasetBackend;
use dsc_core::selector::DatasetChartSelector;
use dsc_core::upload::{content_type_for_path, pretty_summary, UploadFile};
use log::info;
use std::io::Write;
use std::path::Path;

/// Upload `path`, then print the backend's summary and the refreshed
/// dataset list.
///
/// The content type is judged from the file extension, so anything not
/// named `*.csv` is refused before a request is made.
pub async fn run_upload<B: DatasetBackend, W: Write>(
    selector: &mut DatasetChartSelector<B>,
    path: &Path,
    out: &mut W,
) -> anyhow::Result<()> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("{} does not name a file", path.display()))?
        .to_string();
    let content_type = content_type_for_path(path);

    selector
        .state_mut()
        .choose_file(Some(UploadFile::new(name.clone(), content_type, Vec::new())));
    check(selector)?;

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    info!("Uploading {} ({} bytes)", name, bytes.len());
    selector
        .state_mut()
        .choose_file(Some(UploadFile::new(name, content_type, bytes)));

    // the summary is printed even if the directory refresh that follows fails
    if selector.upload().await {
        if let Some(summary) = selector.state().summary() {
            writeln!(out, "Summary Statistics")?;
            writeln!(out, "{}", pretty_summary(summary))?;
            writeln!(out)?;
        }
    }
    check(selector)?;

    writeln!(out, "Datasets")?;
    for dataset in selector.state().datasets() {
        writeln!(out, "{}", dataset)?;
    }
    Ok(())
}
