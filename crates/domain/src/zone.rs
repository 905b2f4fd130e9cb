use crate::record::ResourceRecord;
use std::collections::BTreeMap;
use std::net::IpAddr;

/// Zone name plus the serial from its authority record. Display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneMetadata {
    pub zone: String,
    pub serial: u32,
}

impl ZoneMetadata {
    pub fn new(zone: impl Into<String>, serial: u32) -> Self {
        Self {
            zone: zone.into(),
            serial,
        }
    }
}

/// Record data as it arrives from a zone transfer, before filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferredData {
    A(IpAddr),
    Aaaa(IpAddr),
    Cname(String),
    Soa { serial: u32 },
    /// Any other record type, identified by its mnemonic.
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferredRecord {
    /// Owner name exactly as transferred, usually dot-terminated.
    pub name: String,
    pub ttl: u32,
    pub data: TransferredData,
}

impl TransferredRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: TransferredData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }
}

/// One message worth of records from a zone transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneEnvelope {
    pub records: Vec<TransferredRecord>,
}

impl ZoneEnvelope {
    pub fn new(records: Vec<TransferredRecord>) -> Self {
        Self { records }
    }
}

/// Result of fetching a single zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneFetchResult {
    pub hosts: BTreeMap<String, Vec<ResourceRecord>>,

    pub metadata: ZoneMetadata,
}

impl ZoneFetchResult {
    pub fn host_count(&self) -> usize {
        self.hosts.len()
    }
}

/// Strips a single trailing root separator: `www.a.example.` -> `www.a.example`.
pub fn canonical_hostname(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}
