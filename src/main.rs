use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use cinema_admin::api::ApiClient;
use cinema_admin::config::{Config, ConfigStore, Overrides};
use cinema_admin::logging::init_tracing;
use cinema_admin::ui::pages::Route;
use cinema_admin::ui::runtime::run as run_ui;

/// Terminal admin console for the cinema ticketing API.
#[derive(Debug, Parser)]
#[command(name = "cinema-admin", version, about)]
struct Cli {
    /// Config file (default: <config dir>/cinema-admin/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Skip the login gate (for APIs without authentication)
    #[arg(long)]
    no_auth: bool,

    /// Page to open first, e.g. /rooms
    #[arg(long, value_name = "PATH", default_value = "/")]
    page: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let overrides = Overrides {
        api_url: cli.api_url,
        log_file: cli.log_file,
        no_auth: cli.no_auth,
    };
    let store = ConfigStore::load(config_path.clone(), overrides)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    let config = store.get();

    let Some(start) = Route::from_path(&cli.page) else {
        bail!("Unknown page '{}'", cli.page);
    };

    let log_file = config.logging.resolved_file();
    init_tracing(&log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.api.base_url,
        "Starting cinema-admin"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let client = ApiClient::new(&config.api)?;

    run_ui(&store, client, runtime.handle(), start)?;
    runtime.shutdown_timeout(std::time::Duration::from_secs(1));
    Ok(())
}
