use crate::ports::HostQueryPort;
use crate::use_cases::BuildSnapshotUseCase;
use gethost_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSource {
    Server,
    LocalTransfer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostResolution {
    pub hosts: Vec<String>,
    pub source: HostSource,
}

/// Client path: ask the server, fall back to transferring the zones directly.
pub struct ResolveHostsUseCase {
    remote: Arc<dyn HostQueryPort>,
    local: Arc<BuildSnapshotUseCase>,
}

impl ResolveHostsUseCase {
    pub fn new(remote: Arc<dyn HostQueryPort>, local: Arc<BuildSnapshotUseCase>) -> Self {
        Self { remote, local }
    }

    /// `force_refresh` is forwarded to the server; the local path is always fresh.
    /// A query the server rejects as invalid is final and never retried locally.
    pub async fn execute(
        &self,
        fragment: &str,
        force_refresh: bool,
    ) -> Result<HostResolution, DomainError> {
        match self.remote.query_hosts(fragment, force_refresh).await {
            Ok(hosts) => {
                debug!(matches = hosts.len(), "Answered by server");
                return Ok(HostResolution {
                    hosts,
                    source: HostSource::Server,
                });
            }
            Err(e @ DomainError::InvalidQuery(_)) => return Err(e),
            Err(e) => {
                warn!(error = %e, "Server unavailable, transferring zones locally");
            }
        }

        let snapshot = self.local.execute(fragment).await?;
        let hosts = snapshot.matching(fragment);
        info!(matches = hosts.len(), "Answered by local zone transfer");

        Ok(HostResolution {
            hosts,
            source: HostSource::LocalTransfer,
        })
    }
}
