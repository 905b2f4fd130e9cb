use gethost_domain::{CliOverrides, Config};
use tracing::info;

/// Loads, overrides and validates the configuration. Runs before logging is up.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn log_config_summary(config: &Config) {
    info!(
        zones = ?config.zones.names,
        refresh_interval_secs = config.zones.refresh_interval,
        merge_policy = ?config.zones.merge_policy,
        include_aaaa = config.zones.include_aaaa,
        "Configuration loaded"
    );
}
