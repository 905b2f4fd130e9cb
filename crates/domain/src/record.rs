use std::fmt;
use std::net::IpAddr;

/// The record kinds this system indexes. Everything else in a zone is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Address,
    Alias,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Address => "address",
            RecordKind::Alias => "alias",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValue {
    Address(IpAddr),
    /// Alias target, kept in the form the transfer delivered it.
    Alias(String),
}

/// One indexed record. Immutable once produced by a zone fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Canonical owner name (no trailing root separator).
    pub owner: String,

    pub ttl: u32,

    pub value: RecordValue,
}

impl ResourceRecord {
    pub fn address(owner: impl Into<String>, ttl: u32, address: IpAddr) -> Self {
        Self {
            owner: owner.into(),
            ttl,
            value: RecordValue::Address(address),
        }
    }

    pub fn alias(owner: impl Into<String>, ttl: u32, target: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ttl,
            value: RecordValue::Alias(target.into()),
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self.value {
            RecordValue::Address(_) => RecordKind::Address,
            RecordValue::Alias(_) => RecordKind::Alias,
        }
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            RecordValue::Address(ip) => write!(f, "{} {} address {}", self.owner, self.ttl, ip),
            RecordValue::Alias(target) => write!(f, "{} {} alias {}", self.owner, self.ttl, target),
        }
    }
}
