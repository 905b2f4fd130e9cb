use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid zone name: {0}")]
    InvalidZoneName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Nameserver lookup failed for zone {zone}: {reason}")]
    NameserverLookupFailed { zone: String, reason: String },

    #[error("Zone transfer of {zone} from {server} failed: {reason}")]
    ZoneTransferFailed {
        zone: String,
        server: String,
        reason: String,
    },

    #[error("Fetch task for zone {zone} did not complete: {reason}")]
    FetchTaskFailed { zone: String, reason: String },

    #[error("Could not build cache, {} zone(s) failed: {}", .0.len(), join_errors(.0))]
    SnapshotBuildFailed(Vec<DomainError>),

    #[error("Invalid host query: {0}")]
    InvalidQuery(String),

    #[error("Host query against server failed: {0}")]
    RemoteQueryFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

fn join_errors(errors: &[DomainError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
