//! gethost Domain Layer
pub mod config;
pub mod errors;
pub mod record;
pub mod snapshot;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError, MergePolicy};
pub use errors::DomainError;
pub use record::{RecordKind, RecordValue, ResourceRecord};
pub use snapshot::{HostIndex, ZoneSnapshot};
pub use zone::{
    canonical_hostname, TransferredData, TransferredRecord, ZoneEnvelope, ZoneFetchResult,
    ZoneMetadata,
};
