//! DSC CLI - list, plot and upload CSV datasets held by the storage backend.

use clap::Parser;
use dsc_client::config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "dsc-cli",
    version,
    about = "Dataset chart client for a CSV storage backend"
)]
struct Cli {
    /// Base URL of the backend
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: dsc_cmd::Command,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.base_url.clone());
        match self.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.client_config();
    log::info!("Using backend at {}", config.base_url);
    dsc_cmd::run(cli.command, &config).await
}
