use crate::ports::ZoneCachePort;
use gethost_domain::ZoneMetadata;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStatus {
    pub zones: Vec<ZoneMetadata>,
    pub size: usize,
    /// `None` until the first snapshot is installed.
    pub age: Option<Duration>,
    pub uptime: Duration,
}

pub struct GetCacheStatusUseCase {
    cache: Arc<dyn ZoneCachePort>,
    started_at: Instant,
}

impl GetCacheStatusUseCase {
    pub fn new(cache: Arc<dyn ZoneCachePort>, started_at: Instant) -> Self {
        Self { cache, started_at }
    }

    /// Zones, size and age all come from the same snapshot generation.
    pub fn execute(&self) -> CacheStatus {
        let uptime = self.started_at.elapsed();

        match self.cache.load() {
            Some(cached) => CacheStatus {
                zones: cached.snapshot.zones().to_vec(),
                size: cached.snapshot.len(),
                age: Some(cached.age),
                uptime,
            },
            None => CacheStatus {
                zones: Vec::new(),
                size: 0,
                age: None,
                uptime,
            },
        }
    }
}
