use async_trait::async_trait;
use gethost_domain::DomainError;

#[async_trait]
pub trait NameserverResolver: Send + Sync {
    /// Authoritative nameserver host for `zone`.
    ///
    /// Failures are reported as `DomainError::NameserverLookupFailed`.
    async fn resolve_nameserver(&self, zone: &str) -> Result<String, DomainError>;
}
