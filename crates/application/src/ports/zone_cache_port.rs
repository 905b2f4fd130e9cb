use gethost_domain::{ZoneMetadata, ZoneSnapshot};
use std::sync::Arc;
use std::time::Duration;

/// A snapshot and the time since it was installed, taken from one read.
#[derive(Debug, Clone)]
pub struct CachedSnapshot {
    pub snapshot: Arc<ZoneSnapshot>,
    pub age: Duration,
}

/// Holder of the current snapshot.
///
/// Readers get a whole snapshot or nothing; `replace` is indivisible with respect to them.
/// Callers that need more than one property of the cache should `load` once and read
/// everything from that value.
pub trait ZoneCachePort: Send + Sync {
    fn load(&self) -> Option<CachedSnapshot>;

    fn replace(&self, snapshot: ZoneSnapshot);

    fn current_snapshot(&self) -> Option<Arc<ZoneSnapshot>> {
        self.load().map(|cached| cached.snapshot)
    }

    /// Number of cached hostnames.
    fn size(&self) -> usize {
        self.load().map_or(0, |cached| cached.snapshot.len())
    }

    fn age(&self) -> Option<Duration> {
        self.load().map(|cached| cached.age)
    }

    fn zone_summaries(&self) -> Vec<ZoneMetadata> {
        self.load()
            .map(|cached| cached.snapshot.zones().to_vec())
            .unwrap_or_default()
    }
}
