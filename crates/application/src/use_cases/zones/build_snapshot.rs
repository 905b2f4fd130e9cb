use super::FetchZoneUseCase;
use chrono::Utc;
use gethost_domain::{DomainError, MergePolicy, ZoneSnapshot};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Fans out one fetch per configured zone and merges the results.
///
/// All-or-nothing: every fetch is awaited, and if any failed no snapshot is produced.
pub struct BuildSnapshotUseCase {
    fetcher: Arc<FetchZoneUseCase>,
    zones: Arc<[String]>,
    merge_policy: MergePolicy,
}

impl BuildSnapshotUseCase {
    pub fn new(fetcher: Arc<FetchZoneUseCase>, zones: Vec<String>) -> Self {
        Self {
            fetcher,
            zones: zones.into(),
            merge_policy: MergePolicy::default(),
        }
    }

    pub fn with_merge_policy(mut self, merge_policy: MergePolicy) -> Self {
        self.merge_policy = merge_policy;
        self
    }

    pub fn zones(&self) -> &[String] {
        &self.zones
    }

    #[instrument(skip(self), name = "build_snapshot")]
    pub async fn execute(&self, host_filter: &str) -> Result<ZoneSnapshot, DomainError> {
        debug!(zones = self.zones.len(), "Fetching all zones");

        let handles: Vec<_> = self
            .zones
            .iter()
            .map(|zone| {
                let fetcher = Arc::clone(&self.fetcher);
                let zone = zone.clone();
                let host_filter = host_filter.to_string();
                tokio::spawn(async move { fetcher.execute(&zone, &host_filter).await })
            })
            .collect();

        // Join barrier: results come back in configured zone order.
        let joined = futures::future::join_all(handles).await;

        let mut results = Vec::with_capacity(joined.len());
        let mut failures = Vec::new();

        for (zone, outcome) in self.zones.iter().zip(joined) {
            match outcome {
                Ok(Ok(result)) => results.push(result),
                Ok(Err(e)) => {
                    error!(zone = %zone, error = %e, "Zone fetch failed");
                    failures.push(e);
                }
                Err(e) => {
                    error!(zone = %zone, error = %e, "Zone fetch task panicked");
                    failures.push(DomainError::FetchTaskFailed {
                        zone: zone.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        if !failures.is_empty() {
            return Err(DomainError::SnapshotBuildFailed(failures));
        }

        let snapshot = ZoneSnapshot::merge(results, self.merge_policy, Utc::now());

        info!(
            zones = snapshot.zones().len(),
            hosts = snapshot.len(),
            merge_policy = self.merge_policy.as_str(),
            "Zone snapshot built"
        );

        Ok(snapshot)
    }
}
