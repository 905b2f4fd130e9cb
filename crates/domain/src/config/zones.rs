use crate::snapshot::MergePolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZonesConfig {
    /// Fully-qualified zone names this service may transfer.
    #[serde(default)]
    pub names: Vec<String>,

    /// Seconds between scheduled refresh cycles.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u64,

    /// Seconds allowed for connecting and for each message of a transfer.
    #[serde(default = "default_transfer_timeout")]
    pub transfer_timeout: u64,

    /// Seconds allowed for nameserver discovery.
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout: u64,

    #[serde(default)]
    pub include_aaaa: bool,

    #[serde(default)]
    pub merge_policy: MergePolicy,

    /// Resolver used for NS discovery, `host:port`. Defaults to /etc/resolv.conf.
    #[serde(default)]
    pub resolver: Option<String>,

    /// Transfer every zone from this nameserver instead of discovering one.
    #[serde(default)]
    pub nameserver: Option<String>,
}

impl Default for ZonesConfig {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            refresh_interval: default_refresh_interval(),
            transfer_timeout: default_transfer_timeout(),
            lookup_timeout: default_lookup_timeout(),
            include_aaaa: false,
            merge_policy: MergePolicy::default(),
            resolver: None,
            nameserver: None,
        }
    }
}

fn default_refresh_interval() -> u64 {
    900
}

fn default_transfer_timeout() -> u64 {
    30
}

fn default_lookup_timeout() -> u64 {
    5
}
