use super::BuildSnapshotUseCase;
use crate::ports::ZoneCachePort;
use gethost_domain::DomainError;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A new snapshot was built and installed.
    Refreshed { hosts: usize, zones: usize },

    /// A refresh that started after this request completed while it waited.
    Coalesced,
}

/// Build-and-replace, serialized so at most one rebuild is in flight.
pub struct RefreshZonesUseCase {
    builder: Arc<BuildSnapshotUseCase>,
    cache: Arc<dyn ZoneCachePort>,
    /// Start time of the last refresh that installed a snapshot.
    last_installed: Mutex<Option<Instant>>,
}

impl RefreshZonesUseCase {
    pub fn new(builder: Arc<BuildSnapshotUseCase>, cache: Arc<dyn ZoneCachePort>) -> Self {
        Self {
            builder,
            cache,
            last_installed: Mutex::new(None),
        }
    }

    /// On failure the cache keeps its previous snapshot.
    #[instrument(skip(self), name = "refresh_zones")]
    pub async fn execute(&self) -> Result<RefreshOutcome, DomainError> {
        let requested_at = Instant::now();
        let mut last_installed = self.last_installed.lock().await;

        if matches!(*last_installed, Some(started) if started >= requested_at) {
            debug!("Refresh coalesced with one that completed while waiting");
            return Ok(RefreshOutcome::Coalesced);
        }

        let started = Instant::now();
        let snapshot = self.builder.execute("").await?;
        let outcome = RefreshOutcome::Refreshed {
            hosts: snapshot.len(),
            zones: snapshot.zones().len(),
        };

        self.cache.replace(snapshot);
        *last_installed = Some(started);

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Cache updated"
        );

        Ok(outcome)
    }
}
