use crate::record::ResourceRecord;
use crate::zone::{ZoneFetchResult, ZoneMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical hostname -> records. Ordered, so enumeration is already sorted.
pub type HostIndex = BTreeMap<String, Vec<ResourceRecord>>;

/// How record lists for a hostname seen in more than one zone are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Append later zones' records to the accumulated list.
    #[default]
    Accumulate,

    /// Later zone (in configured order) replaces the list. Legacy behaviour.
    LastZoneWins,
}

impl MergePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accumulate => "accumulate",
            Self::LastZoneWins => "last_zone_wins",
        }
    }
}

/// One fully built generation of the hostname index.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneSnapshot {
    hosts: HostIndex,
    zones: Vec<ZoneMetadata>,
    created_at: DateTime<Utc>,
}

impl ZoneSnapshot {
    pub fn new(hosts: HostIndex, zones: Vec<ZoneMetadata>, created_at: DateTime<Utc>) -> Self {
        Self {
            hosts,
            zones,
            created_at,
        }
    }

    /// Merges per-zone results in iteration order.
    ///
    /// Callers must only pass results from a build in which every zone succeeded.
    pub fn merge<I>(results: I, policy: MergePolicy, created_at: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = ZoneFetchResult>,
    {
        let mut hosts = HostIndex::new();
        let mut zones = Vec::new();

        for result in results {
            zones.push(result.metadata);
            for (hostname, records) in result.hosts {
                match policy {
                    MergePolicy::Accumulate => hosts.entry(hostname).or_default().extend(records),
                    MergePolicy::LastZoneWins => {
                        hosts.insert(hostname, records);
                    }
                }
            }
        }

        Self::new(hosts, zones, created_at)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn zones(&self) -> &[ZoneMetadata] {
        &self.zones
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn records(&self, hostname: &str) -> Option<&[ResourceRecord]> {
        self.hosts.get(hostname).map(Vec::as_slice)
    }

    /// Hostnames containing `fragment` (case-sensitive), ascending.
    /// An empty fragment matches everything.
    pub fn matching(&self, fragment: &str) -> Vec<String> {
        self.hosts
            .keys()
            .filter(|hostname| hostname.contains(fragment))
            .cloned()
            .collect()
    }
}
