use async_trait::async_trait;
use futures::stream::BoxStream;
use gethost_domain::{DomainError, ZoneEnvelope};

/// Envelopes of one transfer session. Must be drained or dropped, never resumed.
pub type ZoneEnvelopeStream = BoxStream<'static, Result<ZoneEnvelope, DomainError>>;

#[async_trait]
pub trait ZoneTransfer: Send + Sync {
    /// Opens a full transfer of `zone` from `nameserver` (port 53).
    async fn transfer(&self, zone: &str, nameserver: &str)
        -> Result<ZoneEnvelopeStream, DomainError>;
}
