#![allow(dead_code)]

use async_trait::async_trait;
use futures::stream;
use gethost_application::ports::{
    CachedSnapshot, HostQueryPort, NameserverResolver, ZoneCachePort, ZoneEnvelopeStream, ZoneTransfer,
};
use gethost_application::use_cases::{
    BuildSnapshotUseCase, FetchZoneUseCase, RefreshZonesUseCase,
};
use chrono::Utc;
use gethost_domain::{
    DomainError, HostIndex, MergePolicy, ResourceRecord, TransferredData, TransferredRecord,
    ZoneEnvelope, ZoneMetadata, ZoneSnapshot,
};
use std::collections::HashMap;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

pub fn soa(zone: &str, serial: u32) -> TransferredRecord {
    TransferredRecord::new(zone, 3600, TransferredData::Soa { serial })
}

pub fn a(name: &str, ip: &str) -> TransferredRecord {
    TransferredRecord::new(name, 300, TransferredData::A(IpAddr::from_str(ip).unwrap()))
}

pub fn aaaa(name: &str, ip: &str) -> TransferredRecord {
    TransferredRecord::new(name, 300, TransferredData::Aaaa(IpAddr::from_str(ip).unwrap()))
}

pub fn cname(name: &str, target: &str) -> TransferredRecord {
    TransferredRecord::new(name, 300, TransferredData::Cname(target.to_string()))
}

pub fn other(name: &str, rtype: &str) -> TransferredRecord {
    TransferredRecord::new(name, 300, TransferredData::Other(rtype.to_string()))
}

pub struct MockNameserverResolver {
    failing: RwLock<Vec<String>>,
    call_count: AtomicU64,
}

impl MockNameserverResolver {
    pub fn new() -> Self {
        Self {
            failing: RwLock::new(Vec::new()),
            call_count: AtomicU64::new(0),
        }
    }

    pub fn fail_zone(&self, zone: &str) {
        self.failing.write().unwrap().push(zone.to_string());
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl NameserverResolver for MockNameserverResolver {
    async fn resolve_nameserver(&self, zone: &str) -> Result<String, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.failing.read().unwrap().iter().any(|z| z == zone) {
            return Err(DomainError::NameserverLookupFailed {
                zone: zone.to_string(),
                reason: "Did not get any NS record".to_string(),
            });
        }
        Ok(format!("ns1.{}", zone))
    }
}

/// Serves canned envelopes per zone. Zones without content transfer as empty.
pub struct MockZoneTransfer {
    zones: RwLock<HashMap<String, Vec<Result<ZoneEnvelope, DomainError>>>>,
    refused: RwLock<Vec<String>>,
    delay: RwLock<Duration>,
    transfer_count: Arc<AtomicU64>,
}

impl MockZoneTransfer {
    pub fn new() -> Self {
        Self {
            zones: RwLock::new(HashMap::new()),
            refused: RwLock::new(Vec::new()),
            delay: RwLock::new(Duration::ZERO),
            transfer_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_zone(self, zone: &str, records: Vec<TransferredRecord>) -> Self {
        self.set_zone(zone, records);
        self
    }

    pub fn set_zone(&self, zone: &str, records: Vec<TransferredRecord>) {
        self.zones
            .write()
            .unwrap()
            .insert(zone.to_string(), vec![Ok(ZoneEnvelope::new(records))]);
    }

    pub fn set_envelopes(&self, zone: &str, envelopes: Vec<Result<ZoneEnvelope, DomainError>>) {
        self.zones
            .write()
            .unwrap()
            .insert(zone.to_string(), envelopes);
    }

    pub fn refuse_zone(&self, zone: &str) {
        self.refused.write().unwrap().push(zone.to_string());
    }

    pub fn allow_all(&self) {
        self.refused.write().unwrap().clear();
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.write().unwrap() = delay;
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

        let delay = *self.delay.read().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if self.refused.read().unwrap().iter().any(|z| z == zone) {
            return Err(DomainError::ZoneTransferFailed {
                zone: zone.to_string(),
                server: format!("{}:53", nameserver),
                reason: "connection refused".to_string(),
            });
        }

        let envelopes = self
            .zones
            .read()
            .unwrap()
            .get(zone)
            .cloned()
            .unwrap_or_default();
        Ok(Box::pin(stream::iter(envelopes)))
    }
}

/// Minimal cache used to observe what the use cases install.
pub struct InMemoryZoneCache {
    current: RwLock<Option<(Arc<ZoneSnapshot>, Instant)>>,
    replace_count: AtomicU64,
}

impl InMemoryZoneCache {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
            replace_count: AtomicU64::new(0),
        }
    }

    pub fn replace_count(&self) -> u64 {
        self.replace_count.load(Ordering::SeqCst)
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
        self.replace_count.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct MockHostQuery {
    response: RwLock<Result<Vec<String>, DomainError>>,
    calls: RwLock<Vec<(String, bool)>>,
}

impl MockHostQuery {
    pub fn answering(hosts: Vec<&str>) -> Self {
        Self {
            response: RwLock::new(Ok(hosts.into_iter().map(String::from).collect())),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            response: RwLock::new(Err(DomainError::RemoteQueryFailed(
                "connection refused".to_string(),
            ))),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub fn rejecting(error: DomainError) -> Self {
        Self {
            response: RwLock::new(Err(error)),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, bool)> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl HostQueryPort for MockHostQuery {
    async fn query_hosts(
        &self,
        fragment: &str,
        force_refresh: bool,
    ) -> Result<Vec<String>, DomainError> {
        self.calls
            .write()
            .unwrap()
            .push((fragment.to_string(), force_refresh));
        self.response.read().unwrap().clone()
    }
}

pub struct Harness {
    pub resolver: Arc<MockNameserverResolver>,
    pub transfer: Arc<MockZoneTransfer>,
    pub cache: Arc<InMemoryZoneCache>,
    pub builder: Arc<BuildSnapshotUseCase>,
    pub refresh: Arc<RefreshZonesUseCase>,
}

impl Harness {
    pub fn new(zones: &[&str], transfer: MockZoneTransfer) -> Self {
        Self::with_policy(zones, transfer, MergePolicy::Accumulate)
    }

    pub fn with_policy(zones: &[&str], transfer: MockZoneTransfer, policy: MergePolicy) -> Self {
        let resolver = Arc::new(MockNameserverResolver::new());
        let transfer = Arc::new(transfer);
        let cache = Arc::new(InMemoryZoneCache::new());
        let fetcher = Arc::new(FetchZoneUseCase::new(resolver.clone(), transfer.clone()));
        let builder = Arc::new(
            BuildSnapshotUseCase::new(fetcher, zones.iter().map(|z| z.to_string()).collect())
                .with_merge_policy(policy),
        );
        let refresh = Arc::new(RefreshZonesUseCase::new(builder.clone(), cache.clone()));

        Self {
            resolver,
            transfer,
            cache,
            builder,
            refresh,
        }
    }
}

/// Installs the next generation after every read, as if a refresh landed between any
/// two reads. Generation `n` has serial `n`, `n` hosts and an age of `n` seconds.
pub struct ChurningZoneCache {
    generation: AtomicU64,
    loads: AtomicU64,
}

impl ChurningZoneCache {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(1),
            loads: AtomicU64::new(0),
        }
    }

    pub fn load_count(&self) -> u64 {
        self.loads.load(Ordering::SeqCst)
    }

    fn generation_snapshot(generation: u64) -> ZoneSnapshot {
        let mut hosts = HostIndex::new();
        for i in 0..generation {
            let owner = format!("host{}.a.example", i);
            hosts.insert(
                owner.clone(),
                vec![ResourceRecord::address(owner, 300, IpAddr::from([10, 0, 0, i as u8]))],
            );
        }
        ZoneSnapshot::new(
            hosts,
            vec![ZoneMetadata::new("a.example.", generation as u32)],
            Utc::now(),
        )
    }
}

impl ZoneCachePort for ChurningZoneCache {
    fn load(&self) -> Option<CachedSnapshot> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let generation = self.generation.fetch_add(1, Ordering::SeqCst);
        Some(CachedSnapshot {
            snapshot: Arc::new(Self::generation_snapshot(generation)),
            age: Duration::from_secs(generation),
        })
    }

    fn replace(&self, _snapshot: ZoneSnapshot) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
