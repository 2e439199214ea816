//! Command implementations for the dataset chart CLI.
//!
//! Each subcommand drives a `DatasetChartSelector` the same way the web
//! client does and prints the result. Any message the selector leaves in its
//! error slot becomes the command's error.

use clap::{Subcommand, ValueEnum};
use dsc_client::config::ClientConfig;
use dsc_client::DatasetClient;
use dsc_core::backend::DatasetBackend;
use dsc_core::selector::DatasetChartSelector;
use std::io::Write;
use std::path::PathBuf;

pub mod browse;
pub mod upload;

/// How `plot` prints a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Label, labels, values and style as one JSON document
    Json,
    /// `x,y` header followed by one row per point
    Csv,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the datasets stored by the backend
    Datasets,

    /// List the columns of a dataset
    Columns {
        /// Dataset identifier, as printed by `datasets`
        dataset: String,
    },

    /// Print the X/Y series for two columns of a dataset
    Plot {
        /// Dataset identifier, as printed by `datasets`
        dataset: String,

        /// Column used for the X axis
        #[arg(short = 'x', long)]
        x: String,

        /// Column used for the Y axis
        #[arg(short = 'y', long)]
        y: String,

        /// Pass cell values through instead of parsing them as numbers
        #[arg(long)]
        raw: bool,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Upload a CSV file, print its summary and the refreshed dataset list
    Upload {
        /// Path to the CSV file
        file: PathBuf,
    },
}

/// Fail with the selector's flat error message, if it holds one.
pub(crate) fn check<B: DatasetBackend>(selector: &DatasetChartSelector<B>) -> anyhow::Result<()> {
    match selector.state().error() {
        Some(message) => anyhow::bail!("{}", message),
        None => Ok(()),
    }
}

pub async fn run(command: Command, config: &ClientConfig) -> anyhow::Result<()> {
    let client = DatasetClient::new(config)?;
    let mut selector = DatasetChartSelector::new(client);
    let mut out = std::io::stdout().lock();
    run_with(&mut selector, command, &mut out).await?;
    out.flush()?;
    Ok(())
}

/// Run `command` against any backend, writing to `out`.
pub async fn run_with<B, W>(
    selector: &mut DatasetChartSelector<B>,
    command: Command,
    out: &mut W,
) -> anyhow::Result<()>
where
    B: DatasetBackend,
    W: Write,
{
    match command {
        Command::Datasets => browse::run_datasets(selector, out).await,
        Command::Columns { dataset } => browse::run_columns(selector, &dataset, out).await,
        Command::Plot {
            dataset,
            x,
            y,
            raw,
            format,
        } => browse::run_plot(selector, &dataset, &x, &y, raw, format, out).await,
        Command::Upload { file } => upload::run_upload(selector, &file, out).await,
    }
}
