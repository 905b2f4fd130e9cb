pub mod hosts;
pub mod status;
pub mod zones;

// Re-export use cases
pub use hosts::{HostResolution, HostSource, LookupHostsUseCase, ResolveHostsUseCase};
pub use status::{CacheStatus, GetCacheStatusUseCase};
pub use zones::{BuildSnapshotUseCase, FetchZoneUseCase, RefreshOutcome, RefreshZonesUseCase};
