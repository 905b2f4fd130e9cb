use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use super::transport::UdpTransport;
use super::DNS_PORT;
use async_trait::async_trait;
use gethost_application::ports::NameserverResolver;
use gethost_domain::config::ZonesConfig;
use gethost_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, instrument};

pub const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

/// Finds a zone's nameserver with an NS query against a recursive resolver.
pub struct SystemNameserverResolver {
    transport: UdpTransport,
    timeout: Duration,
}

impl SystemNameserverResolver {
    pub fn new(resolver: SocketAddr, timeout: Duration) -> Self {
        Self {
            transport: UdpTransport::new(resolver),
            timeout,
        }
    }

    /// Uses the first `nameserver` entry of the host's resolver configuration.
    pub fn from_resolv_conf(path: impl AsRef<Path>, timeout: Duration) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DomainError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let ip = parse_resolv_conf(&contents).ok_or_else(|| {
            DomainError::ConfigError(format!("No nameserver entry in {}", path.display()))
        })?;

        Ok(Self::new(SocketAddr::new(ip, DNS_PORT), timeout))
    }

    pub fn resolver_addr(&self) -> SocketAddr {
        self.transport.server_addr()
    }
}

#[async_trait]
impl NameserverResolver for SystemNameserverResolver {
    #[instrument(skip(self), name = "resolve_nameserver")]
    async fn resolve_nameserver(&self, zone: &str) -> Result<String, DomainError> {
        let failure = |reason: String| DomainError::NameserverLookupFailed {
            zone: zone.to_string(),
            reason,
        };

        let query = MessageBuilder::build_ns_query(zone).map_err(|e| failure(e.to_string()))?;
        let response = self
            .transport
            .send(&query, self.timeout)
            .await
            .map_err(|e| failure(e.to_string()))?;
        let message = ResponseParser::parse(&response).map_err(|e| failure(e.to_string()))?;

        let nameserver = ResponseParser::first_nameserver(&message)
            .ok_or_else(|| failure("Did not get any NS record".to_string()))?;

        debug!(zone = %zone, nameserver = %nameserver, "NS lookup answered");
        Ok(nameserver)
    }
}

/// Transfers every zone from one configured server.
pub struct StaticNameserverResolver {
    nameserver: String,
}

impl StaticNameserverResolver {
    pub fn new(nameserver: impl Into<String>) -> Self {
        Self {
            nameserver: nameserver.into(),
        }
    }
}

#[async_trait]
impl NameserverResolver for StaticNameserverResolver {
    async fn resolve_nameserver(&self, _zone: &str) -> Result<String, DomainError> {
        Ok(self.nameserver.clone())
    }
}

/// Defers [`resolver_from_config`] until the first zone actually needs a nameserver.
pub struct LazyNameserverResolver {
    zones: ZonesConfig,
    inner: OnceCell<Arc<dyn NameserverResolver>>,
}

impl LazyNameserverResolver {
    pub fn new(zones: ZonesConfig) -> Self {
        Self {
            zones,
            inner: OnceCell::new(),
        }
    }
}

#[async_trait]
impl NameserverResolver for LazyNameserverResolver {
    async fn resolve_nameserver(&self, zone: &str) -> Result<String, DomainError> {
        let resolver = self
            .inner
            .get_or_try_init(|| async { resolver_from_config(&self.zones) })
            .await?;
        resolver.resolve_nameserver(zone).await
    }
}

/// Fixed nameserver first, then an explicit resolver, then the host's resolv.conf.
pub fn resolver_from_config(
    zones: &ZonesConfig,
) -> Result<Arc<dyn NameserverResolver>, DomainError> {
    if let Some(nameserver) = &zones.nameserver {
        return Ok(Arc::new(StaticNameserverResolver::new(nameserver.clone())));
    }

    let timeout = Duration::from_secs(zones.lookup_timeout);
    let resolver = match &zones.resolver {
        Some(addr) => SystemNameserverResolver::new(parse_resolver_addr(addr)?, timeout),
        None => SystemNameserverResolver::from_resolv_conf(RESOLV_CONF_PATH, timeout)?,
    };
    debug!(resolver = %resolver.resolver_addr(), "Using system resolver for NS discovery");
    Ok(Arc::new(resolver))
}

/// Accepts `ip` or `ip:port`; a bare address gets port 53.
pub fn parse_resolver_addr(value: &str) -> Result<SocketAddr, DomainError> {
    if let Ok(addr) = value.parse::<SocketAddr>() {
        return Ok(addr);
    }
    value
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DNS_PORT))
        .map_err(|_| DomainError::ConfigError(format!("Invalid resolver address: {}", value)))
}

pub fn parse_resolv_conf(contents: &str) -> Option<IpAddr> {
    contents.lines().find_map(|line| {
        let mut fields = line.split_whitespace();
        if fields.next()? != "nameserver" {
            return None;
        }
        // Link-local entries may carry a scope suffix: fe80::1%eth0
        let addr = fields.next()?.split('%').next()?;
        addr.parse().ok()
    })
}
