use gethost_application::ports::ZoneCachePort;
use gethost_application::use_cases::{
    BuildSnapshotUseCase, FetchZoneUseCase, GetCacheStatusUseCase, LookupHostsUseCase,
    RefreshZonesUseCase,
};
use gethost_domain::Config;
use gethost_infrastructure::cache::ZoneCache;
use gethost_infrastructure::dns::{resolver_from_config, AxfrZoneTransfer};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

pub struct Services {
    pub refresh: Arc<RefreshZonesUseCase>,
    pub lookup_hosts: Arc<LookupHostsUseCase>,
    pub get_status: Arc<GetCacheStatusUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        info!("Initializing zone services");

        let zones = &config.zones;
        let cache: Arc<dyn ZoneCachePort> = Arc::new(ZoneCache::new());

        let resolver = resolver_from_config(zones)?;
        let transfer = Arc::new(AxfrZoneTransfer::new(Duration::from_secs(
            zones.transfer_timeout,
        )));

        let fetcher =
            Arc::new(FetchZoneUseCase::new(resolver, transfer).with_aaaa(zones.include_aaaa));
        let builder = Arc::new(
            BuildSnapshotUseCase::new(fetcher, zones.names.clone())
                .with_merge_policy(zones.merge_policy),
        );
        let refresh = Arc::new(RefreshZonesUseCase::new(builder, cache.clone()));

        Ok(Self {
            lookup_hosts: Arc::new(LookupHostsUseCase::new(cache.clone(), refresh.clone())),
            get_status: Arc::new(GetCacheStatusUseCase::new(cache, Instant::now())),
            refresh,
        })
    }
}
