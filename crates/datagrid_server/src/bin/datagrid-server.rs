//! Datagrid Server - serves fixture-backed grid views over HTTP.
//!
//! Each configured view answers grid requests at its route: the JSON payload
//! when the request carries a `json` parameter, an HTML table otherwise.

use axum::Router;
use clap::Parser;
use datagrid_server::{DatagridServerConfig, fixture_view, router};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the datagrid server.
#[derive(Parser, Debug)]
#[command(name = "datagrid-server")]
#[command(about = "Datagrid Server - paginated grid views over HTTP")]
#[command(version)]
struct Args {
    /// Path to server configuration file
    #[arg(short, long, default_value = "datagrid.toml", env = "DATAGRID_CONFIG")]
    config: PathBuf,

    /// Override the configured bind address
    #[arg(long)]
    bind: Option<String>,

    /// Dry run mode (validate configuration and fixtures, then exit)
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!("Starting Datagrid Server");
    info!(config_file = ?args.config, "Loading configuration");

    let config = DatagridServerConfig::from_file(&args.config)?;
    info!(
        views = config.views.len(),
        bind_address = %config.server.bind_address,
        "Configuration loaded"
    );
    if config.views.is_empty() {
        warn!("No views configured");
    }

    let mut app = Router::new();
    for view_config in &config.views {
        let view = fixture_view(view_config)?;
        info!(
            view = %view.name(),
            route = %view.route(),
            columns = view.presenter().column_count(),
            "View configured"
        );
        app = app.merge(router(Arc::new(view)));
    }

    if args.dry_run {
        info!("DRY RUN MODE - configuration validation complete");
        return Ok(());
    }

    let bind_address = args.bind.unwrap_or(config.server.bind_address);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
