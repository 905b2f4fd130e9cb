#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use futures::stream;
use gethost_api::{create_api_routes, AppState, VersionInfo};
use gethost_application::ports::{
    CachedSnapshot, NameserverResolver, ZoneCachePort, ZoneEnvelopeStream, ZoneTransfer,
};
use gethost_application::use_cases::{
    BuildSnapshotUseCase, FetchZoneUseCase, GetCacheStatusUseCase, LookupHostsUseCase,
    RefreshZonesUseCase,
};
use gethost_domain::{
    DomainError, TransferredData, TransferredRecord, ZoneEnvelope, ZoneSnapshot,
};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Instant;

pub const ZONE: &str = "a.example.";

pub struct MockNameserverResolver;

#[async_trait]
impl NameserverResolver for MockNameserverResolver {
    async fn resolve_nameserver(&self, zone: &str) -> Result<String, DomainError> {
        Ok(format!("ns1.{}", zone))
    }
}

/// Serves the current host list for every zone it is asked about.
pub struct MockZoneTransfer {
    hosts: RwLock<Vec<String>>,
    should_fail: AtomicBool,
    transfer_count: AtomicU64,
}

impl MockZoneTransfer {
    pub fn new(hosts: &[&str]) -> Self {
        Self {
            hosts: RwLock::new(hosts.iter().map(|h| h.to_string()).collect()),
            should_fail: AtomicBool::new(false),
            transfer_count: AtomicU64::new(0),
        }
    }

    pub fn add_host(&self, host: &str) {
        self.hosts.write().unwrap().push(host.to_string());
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn transfer_count(&self) -> u64 {
        self.transfer_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ZoneTransfer for MockZoneTransfer {
    async fn transfer(
        &self,
        zone: &str,
        nameserver: &str,
    ) -> Result<ZoneEnvelopeStream, DomainError> {
        self.transfer_count.fetch_add(1, Ordering::SeqCst);

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::ZoneTransferFailed {
                zone: zone.to_string(),
                server: format!("{}:53", nameserver),
                reason: "connection refused".to_string(),
            });
        }

        let mut records = vec![TransferredRecord::new(
            zone,
            3600,
            TransferredData::Soa { serial: 2024010101 },
        )];
        for host in self.hosts.read().unwrap().iter() {
            records.push(TransferredRecord::new(
                host.clone(),
                300,
                TransferredData::A(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))),
            ));
        }
        Ok(Box::pin(stream::iter(vec![Ok(ZoneEnvelope::new(records))])))
    }
}

pub struct InMemoryZoneCache {
    current: RwLock<Option<(Arc<ZoneSnapshot>, Instant)>>,
}

impl InMemoryZoneCache {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }
}

impl ZoneCachePort for InMemoryZoneCache {
    fn load(&self) -> Option<CachedSnapshot> {
        self.current
            .read()
            .unwrap()
            .as_ref()
            .map(|(snapshot, at)| CachedSnapshot {
                snapshot: Arc::clone(snapshot),
                age: at.elapsed(),
            })
    }

    fn replace(&self, snapshot: ZoneSnapshot) {
        *self.current.write().unwrap() = Some((Arc::new(snapshot), Instant::now()));
    }
}

pub struct TestApp {
    pub router: Router,
    pub transfer: Arc<MockZoneTransfer>,
    pub refresh: Arc<RefreshZonesUseCase>,
}

pub fn create_test_app(hosts: &[&str]) -> TestApp {
    let transfer = Arc::new(MockZoneTransfer::new(hosts));
    let cache = Arc::new(InMemoryZoneCache::new());

    let fetcher = Arc::new(FetchZoneUseCase::new(
        Arc::new(MockNameserverResolver),
        transfer.clone(),
    ));
    let builder = Arc::new(BuildSnapshotUseCase::new(fetcher, vec![ZONE.to_string()]));
    let refresh = Arc::new(RefreshZonesUseCase::new(builder, cache.clone()));

    let state = AppState {
        lookup_hosts: Arc::new(LookupHostsUseCase::new(cache.clone(), refresh.clone())),
        get_status: Arc::new(GetCacheStatusUseCase::new(cache, Instant::now())),
        version: Arc::new(VersionInfo::new("gethost-server", "0.3.0").with_commit(Some("abc123"))),
    };

    TestApp {
        router: create_api_routes(state),
        transfer,
        refresh,
    }
}
