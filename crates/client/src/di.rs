use gethost_application::use_cases::{BuildSnapshotUseCase, FetchZoneUseCase, ResolveHostsUseCase};
use gethost_domain::Config;
use gethost_infrastructure::dns::{AxfrZoneTransfer, LazyNameserverResolver};
use gethost_infrastructure::http::HttpHostQueryClient;
use std::sync::Arc;
use std::time::Duration;

/// Server client plus a local transfer path over the same zone list.
/// The nameserver resolver is only built once the local path runs.
pub fn build_resolve_hosts(config: &Config) -> anyhow::Result<ResolveHostsUseCase> {
    let zones = &config.zones;

    let remote = Arc::new(HttpHostQueryClient::new(
        config.server_base_url(),
        Duration::from_millis(config.client.timeout_ms),
    )?);

    let transfer = Arc::new(AxfrZoneTransfer::new(Duration::from_secs(
        zones.transfer_timeout,
    )));
    let resolver = Arc::new(LazyNameserverResolver::new(zones.clone()));
    let fetcher =
        Arc::new(FetchZoneUseCase::new(resolver, transfer).with_aaaa(zones.include_aaaa));
    let local = Arc::new(
        BuildSnapshotUseCase::new(fetcher, zones.names.clone())
            .with_merge_policy(zones.merge_policy),
    );

    Ok(ResolveHostsUseCase::new(remote, local))
}
