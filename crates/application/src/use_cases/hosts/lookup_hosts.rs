use crate::ports::ZoneCachePort;
use crate::use_cases::RefreshZonesUseCase;
use std::sync::Arc;
use tracing::{debug, warn};

/// Server read path: match a fragment against the cached hostnames.
pub struct LookupHostsUseCase {
    cache: Arc<dyn ZoneCachePort>,
    refresh: Arc<RefreshZonesUseCase>,
}

impl LookupHostsUseCase {
    pub fn new(cache: Arc<dyn ZoneCachePort>, refresh: Arc<RefreshZonesUseCase>) -> Self {
        Self { cache, refresh }
    }

    /// Sorted hostnames containing `fragment`.
    ///
    /// With `force_refresh` the caller waits for a synchronous rebuild first. A failed
    /// rebuild is logged and the retained snapshot answers instead.
    pub async fn execute(&self, fragment: &str, force_refresh: bool) -> Vec<String> {
        if force_refresh {
            debug!(fragment = %fragment, "Forced refresh requested");
            if let Err(e) = self.refresh.execute().await {
                warn!(error = %e, "Forced refresh failed, answering from current cache");
            }
        }

        let hosts = match self.cache.current_snapshot() {
            Some(snapshot) => snapshot.matching(fragment),
            None => Vec::new(),
        };

        debug!(fragment = %fragment, matches = hosts.len(), "Lookup answered");
        hosts
    }
}
