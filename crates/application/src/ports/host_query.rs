use async_trait::async_trait;
use gethost_domain::DomainError;

/// Remote query against a running gethost server.
#[async_trait]
pub trait HostQueryPort: Send + Sync {
    /// Sorted hostnames matching `fragment`. Any transport, status or body problem is
    /// reported as `DomainError::RemoteQueryFailed`.
    async fn query_hosts(&self, fragment: &str, force_refresh: bool)
        -> Result<Vec<String>, DomainError>;
}
