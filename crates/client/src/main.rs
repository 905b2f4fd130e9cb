use clap::Parser;
use gethost_domain::CliOverrides;
use std::io::{self, Write};
use tracing::debug;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "gethost")]
#[command(version)]
#[command(about = "Look up hostnames in the gethost cache, or transfer the zones directly")]
struct Cli {
    /// Substring to look for in host names
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    fragment: Option<String>,

    /// List every known host
    #[arg(short = 'a', long)]
    all: bool,

    /// Ask the server to refresh its zones before answering
    #[arg(long)]
    nc: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Server URL, without the port
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Report where the answer came from
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Emit span timings
    #[arg(long)]
    tracing: bool,
}

impl Cli {
    fn fragment(&self) -> &str {
        if self.all {
            ""
        } else {
            self.fragment.as_deref().unwrap_or_default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: None,
        server_url: cli.server.clone(),
        log_level: cli.log_level.clone(),
        verbose: cli.verbose,
        tracing: cli.tracing,
    };
    let config = gethost_domain::Config::load(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config.logging);
    config.validate()?;

    let resolve_hosts = di::build_resolve_hosts(&config)?;
    let resolution = resolve_hosts.execute(cli.fragment(), cli.nc).await?;
    debug!(
        source = ?resolution.source,
        matches = resolution.hosts.len(),
        "Lookup finished"
    );

    let mut stdout = io::stdout().lock();
    for host in &resolution.hosts {
        writeln!(stdout, "{}", host)?;
    }
    stdout.flush()?;

    Ok(())
}
