mod host_query;
mod nameserver_resolver;
mod zone_cache_port;
mod zone_transfer;

pub use host_query::HostQueryPort;
pub use nameserver_resolver::NameserverResolver;
pub use zone_cache_port::{CachedSnapshot, ZoneCachePort};
pub use zone_transfer::{ZoneEnvelopeStream, ZoneTransfer};

// Re-export for convenience
pub use gethost_domain::{ZoneMetadata, ZoneSnapshot};
