use crate::ports::{NameserverResolver, ZoneTransfer};
use futures::StreamExt;
use gethost_domain::{
    canonical_hostname, DomainError, HostIndex, ResourceRecord, TransferredData,
    TransferredRecord, ZoneFetchResult, ZoneMetadata,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Transfers one zone and keeps its address and alias records.
pub struct FetchZoneUseCase {
    resolver: Arc<dyn NameserverResolver>,
    transfer: Arc<dyn ZoneTransfer>,
    include_aaaa: bool,
}

impl FetchZoneUseCase {
    pub fn new(resolver: Arc<dyn NameserverResolver>, transfer: Arc<dyn ZoneTransfer>) -> Self {
        Self {
            resolver,
            transfer,
            include_aaaa: false,
        }
    }

    pub fn with_aaaa(mut self, include_aaaa: bool) -> Self {
        self.include_aaaa = include_aaaa;
        self
    }

    /// `host_filter` empty means every address/alias record in the zone.
    #[instrument(skip(self), name = "fetch_zone")]
    pub async fn execute(
        &self,
        zone: &str,
        host_filter: &str,
    ) -> Result<ZoneFetchResult, DomainError> {
        let nameserver = self.resolver.resolve_nameserver(zone).await?;
        debug!(zone = %zone, nameserver = %nameserver, "Name server for zone");

        let mut envelopes = self.transfer.transfer(zone, &nameserver).await?;

        let mut hosts = HostIndex::new();
        let mut serial = None;
        let mut envelope_count = 0usize;

        while let Some(envelope) = envelopes.next().await {
            let envelope = envelope?;
            envelope_count += 1;

            for record in envelope.records {
                if let TransferredData::Soa { serial: s } = record.data {
                    serial.get_or_insert(s);
                    continue;
                }
                if let Some(indexed) = self.index_record(record, host_filter) {
                    hosts.entry(indexed.owner.clone()).or_default().push(indexed);
                }
            }
        }

        let serial = serial.unwrap_or_else(|| {
            warn!(zone = %zone, "Transfer carried no SOA record, reporting serial 0");
            0
        });

        debug!(
            zone = %zone,
            envelopes = envelope_count,
            hosts = hosts.len(),
            serial,
            "Done reading zone"
        );

        Ok(ZoneFetchResult {
            hosts,
            metadata: ZoneMetadata::new(zone, serial),
        })
    }

    fn index_record(&self, record: TransferredRecord, host_filter: &str) -> Option<ResourceRecord> {
        let owner = canonical_hostname(&record.name);
        if !host_filter.is_empty() && !owner.contains(host_filter) {
            return None;
        }

        match record.data {
            TransferredData::A(ip) => Some(ResourceRecord::address(owner, record.ttl, ip)),
            TransferredData::Aaaa(ip) if self.include_aaaa => {
                Some(ResourceRecord::address(owner, record.ttl, ip))
            }
            TransferredData::Cname(target) => Some(ResourceRecord::alias(owner, record.ttl, target)),
            _ => None,
        }
    }
}
