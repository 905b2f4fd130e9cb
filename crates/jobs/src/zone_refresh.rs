use gethost_application::use_cases::{RefreshOutcome, RefreshZonesUseCase};
use gethost_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 900;

/// Keeps the zone cache fresh.
///
/// The first cycle runs immediately so the server has data as soon as possible. The
/// interval is measured from the end of one cycle to the start of the next, so a slow
/// transfer never causes cycles to overlap. A failed cycle leaves the cache untouched.
pub struct ZoneRefreshJob {
    refresh: Arc<RefreshZonesUseCase>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl ZoneRefreshJob {
    pub fn new(refresh: Arc<RefreshZonesUseCase>) -> Self {
        Self {
            refresh,
            interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval.as_secs(),
            "Starting zone refresh job"
        );

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => break,
                outcome = self.refresh.execute() => self.report(outcome),
            }

            tokio::select! {
                _ = self.shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        info!("ZoneRefreshJob: shutting down");
    }

    fn report(&self, outcome: Result<RefreshOutcome, DomainError>) {
        match outcome {
            Ok(RefreshOutcome::Refreshed { hosts, zones }) => {
                info!(hosts, zones, "Scheduled refresh completed");
            }
            Ok(RefreshOutcome::Coalesced) => {
                debug!("Scheduled refresh satisfied by a concurrent refresh");
            }
            Err(e) => {
                error!(error = %e, "Scheduled refresh failed, keeping previous cache");
            }
        }
    }
}
