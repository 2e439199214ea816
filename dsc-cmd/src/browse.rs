//! Listing datasets and columns, and printing a series.

use crate::{check, OutputFormat};
use dsc_core::backend::DatasetBackend;
use dsc_core::selector::DatasetChartSelector;
use dsc_core::series::{Series, SeriesMode};
use log::info;
use serde_json::Value;
use std::io::Write;

pub async fn run_datasets<B: DatasetBackend, W: Write>(
    selector: &mut DatasetChartSelector<B>,
    out: &mut W,
) -> anyhow::Result<()> {
    selector.refresh_datasets().await;
    check(selector)?;
    for dataset in selector.state().datasets() {
        writeln!(out, "{}", dataset)?;
    }
    Ok(())
}

/// Select `dataset` and wait for its rows.
async fn load<B: DatasetBackend>(
    selector: &mut DatasetChartSelector<B>,
    dataset: &str,
) -> anyhow::Result<()> {
    if dataset.trim().is_empty() {
        anyhow::bail!("Dataset name must not be empty.");
    }
    selector.select_dataset(dataset).await;
    check(selector)
}

pub async fn run_columns<B: DatasetBackend, W: Write>(
    selector: &mut DatasetChartSelector<B>,
    dataset: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    load(selector, dataset).await?;
    for column in selector.state().columns() {
        writeln!(out, "{}", column)?;
    }
    Ok(())
}

pub async fn run_plot<B: DatasetBackend, W: Write>(
    selector: &mut DatasetChartSelector<B>,
    dataset: &str,
    x: &str,
    y: &str,
    raw: bool,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    load(selector, dataset).await?;

    let columns = selector.state().columns();
    for column in [x, y] {
        if !columns.iter().any(|c| c == column) {
            anyhow::bail!(
                "Unknown column '{}'. Available: {}",
                column,
                columns.join(", ")
            );
        }
    }

    let state = selector.state_mut();
    state.set_mode(if raw { SeriesMode::Raw } else { SeriesMode::Numeric });
    state.set_x_column(x);
    state.set_y_column(y);
    let series = state
        .chart_series()
        .ok_or_else(|| anyhow::anyhow!("Both columns must be named."))?;
    info!("Plotting {} ({} points)", series.label(), series.len());

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &series)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv(&series, out)?,
    }
    Ok(())
}

fn number_text(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        v.to_string()
    }
}

fn value_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn write_csv<W: Write>(series: &Series, out: &mut W) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["x", "y"])?;
    match series {
        Series::Numeric(s) => {
            for (x, y) in s.points() {
                writer.write_record([number_text(*x), number_text(*y)])?;
            }
        }
        Series::Raw(s) => {
            for (x, y) in s.points() {
                writer.write_record([value_text(x), value_text(y)])?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
