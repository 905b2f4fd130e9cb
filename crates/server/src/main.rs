use anyhow::Context;
use clap::Parser;
use gethost_api::{AppState, VersionInfo};
use gethost_domain::CliOverrides;
use gethost_jobs::{JobRunner, ZoneRefreshJob};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "gethost-server")]
#[command(version)]
#[command(about = "gethost server - caches hostnames from DNS zone transfers and serves lookups over HTTP")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log every reload and every answer
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Emit span timings
    #[arg(long)]
    tracing: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        server_url: None,
        log_level: cli.log_level.clone(),
        verbose: cli.verbose,
        tracing: cli.tracing,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting gethost server v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config_summary(&config);

    let services = di::Services::new(&config)?;
    let shutdown = CancellationToken::new();

    let refresh_job = ZoneRefreshJob::new(services.refresh.clone())
        .with_interval(Duration::from_secs(config.zones.refresh_interval));
    let job_handles = JobRunner::new()
        .with_zone_refresh(refresh_job)
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let version = VersionInfo::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
        .with_commit(option_env!("GETHOST_GIT_COMMIT"));

    let app_state = AppState {
        lookup_hosts: services.lookup_hosts,
        get_status: services.get_status,
        version: Arc::new(version),
    };

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        info!("Shutdown signal received");
        signal_token.cancel();
    });

    let bind_ip: IpAddr = config
        .server
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address: {}", config.server.bind_address))?;
    let web_addr = SocketAddr::new(bind_ip, config.server.port);

    let served = server::start_web_server(web_addr, app_state, shutdown.clone()).await;

    shutdown.cancel();
    for handle in job_handles {
        if let Err(e) = handle.await {
            error!(error = %e, "Background job ended abnormally");
        }
    }

    served?;
    info!("Server shutdown complete");
    Ok(())
}
