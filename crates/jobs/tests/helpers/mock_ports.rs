#![allow(dead_code)]

use async_trait::async_trait;
use futures::stream;
use gethost_application::ports::{
    CachedSnapshot, NameserverResolver, ZoneCachePort, ZoneEnvelopeStream, ZoneTransfer,
};
use gethost_application::use_cases::{
    BuildSnapshotUseCase, FetchZoneUseCase, RefreshZonesUseCase,
};
use gethost_domain::{
    DomainError, TransferredData, TransferredRecord, ZoneEnvelope, ZoneSnapshot,
};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Instant;

pub struct MockNameserverResolver;

#[async_trait]
impl NameserverResolver for MockNameserverResolver {
    async fn resolve_nameserver(&self, zone: &str) -> Result<String, DomainError> {
        Ok(format!("ns1.{}", zone))
    }
}

/// Every transfer bumps the serial, so each successful cycle is distinguishable.
pub struct MockZoneTransfer {
    serial: AtomicU32,
    should_fail: AtomicBool,
    transfer_count: AtomicU64,
}

impl MockZoneTransfer {
    pub fn new() -> Self {
        Self {
            serial: AtomicU32::new(0),
            should_fail: AtomicBool::new(false),
            transfer_count: AtomicU64::new(0),
        }
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

        let serial = self.serial.fetch_add(1, Ordering::SeqCst) + 1;
        let records = vec![
            TransferredRecord::new(zone, 3600, TransferredData::Soa { serial }),
            TransferredRecord::new(
                format!("www.{}", zone),
                300,
                TransferredData::A(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))),
            ),
            TransferredRecord::new(zone, 3600, TransferredData::Soa { serial }),
        ];
        Ok(Box::pin(stream::iter(vec![Ok(ZoneEnvelope::new(records))])))
    }
}

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

    pub fn serial(&self) -> Option<u32> {
        self.zone_summaries().first().map(|z| z.serial)
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

pub fn make_refresh(
    transfer: Arc<MockZoneTransfer>,
    cache: Arc<InMemoryZoneCache>,
) -> Arc<RefreshZonesUseCase> {
    let fetcher = Arc::new(FetchZoneUseCase::new(
        Arc::new(MockNameserverResolver),
        transfer,
    ));
    let builder = Arc::new(BuildSnapshotUseCase::new(
        fetcher,
        vec!["a.example.".to_string()],
    ));
    Arc::new(RefreshZonesUseCase::new(builder, cache))
}
