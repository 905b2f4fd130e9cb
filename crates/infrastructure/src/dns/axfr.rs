//! Full zone transfer (AXFR) over TCP.
//!
//! The response is a sequence of length-prefixed messages. The first record of the first
//! message is the zone's SOA; the transfer is complete once that SOA appears a second time.

use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use super::transport::{resolver, tcp};
use super::DNS_PORT;
use async_trait::async_trait;
use gethost_application::ports::{ZoneEnvelopeStream, ZoneTransfer};
use gethost_domain::{canonical_hostname, DomainError, TransferredData, ZoneEnvelope};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tracing::{debug, instrument};

pub struct AxfrZoneTransfer {
    port: u16,
    timeout: Duration,
}

impl AxfrZoneTransfer {
    /// `timeout` bounds the connect and each message read separately.
    pub fn new(timeout: Duration) -> Self {
        Self {
            port: DNS_PORT,
            timeout,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    async fn open(&self, zone: &str, addrs: &[SocketAddr]) -> Result<TcpStream, String> {
        let mut last_error = String::from("no addresses to try");

        for addr in addrs {
            match tcp::connect(*addr, self.timeout).await {
                Ok(mut stream) => {
                    let query = MessageBuilder::build_axfr_query(zone).map_err(|e| e.to_string())?;
                    tokio::time::timeout(
                        self.timeout,
                        tcp::send_with_length_prefix(&mut stream, &query),
                    )
                    .await
                    .map_err(|_| format!("Timeout sending transfer request to {}", addr))?
                    .map_err(|e| e.to_string())?;

                    debug!(zone = %zone, server = %addr, "Transfer requested");
                    return Ok(stream);
                }
                Err(e) => {
                    debug!(zone = %zone, server = %addr, error = %e, "Connect failed");
                    last_error = e.to_string();
                }
            }
        }

        Err(last_error)
    }
}

#[async_trait]
impl ZoneTransfer for AxfrZoneTransfer {
    #[instrument(skip(self), name = "axfr_transfer")]
    async fn transfer(
        &self,
        zone: &str,
        nameserver: &str,
    ) -> Result<ZoneEnvelopeStream, DomainError> {
        let host = canonical_hostname(nameserver);
        let server = format!("{}:{}", host, self.port);
        let failure = |reason: String| DomainError::ZoneTransferFailed {
            zone: zone.to_string(),
            server: server.clone(),
            reason,
        };

        let addrs = resolver::resolve_all(host, self.port, self.timeout)
            .await
            .map_err(|e| failure(e.to_string()))?;
        let stream = self.open(zone, &addrs).await.map_err(failure)?;

        let session = TransferSession {
            stream,
            zone: zone.to_string(),
            server: server.clone(),
            timeout: self.timeout,
            messages: 0,
            soa_seen: 0,
            finished: false,
        };

        Ok(Box::pin(futures::stream::try_unfold(
            session,
            |mut session| async move {
                let envelope = session.next_envelope().await?;
                Ok::<_, DomainError>(envelope.map(|envelope| (envelope, session)))
            },
        )))
    }
}

struct TransferSession {
    stream: TcpStream,
    zone: String,
    server: String,
    timeout: Duration,
    messages: usize,
    soa_seen: usize,
    finished: bool,
}

impl TransferSession {
    async fn next_envelope(&mut self) -> Result<Option<ZoneEnvelope>, DomainError> {
        if self.finished {
            return Ok(None);
        }

        let bytes = tokio::time::timeout(
            self.timeout,
            tcp::read_with_length_prefix(&mut self.stream),
        )
        .await
        .map_err(|_| self.failure(format!("Timeout after {:?} waiting for data", self.timeout)))?
        .map_err(|e| {
            self.failure(format!(
                "Stream ended before the closing SOA after {} message(s): {}",
                self.messages, e
            ))
        })?;

        let message = ResponseParser::parse(&bytes).map_err(|e| self.failure(e.to_string()))?;
        let answers = message.answers();

        let mut records = Vec::with_capacity(answers.len());
        for record in answers {
            let transferred = ResponseParser::transferred_record(record);
            if matches!(transferred.data, TransferredData::Soa { .. }) {
                self.soa_seen += 1;
            } else if self.soa_seen == 0 {
                return Err(self.failure("Transfer did not start with SOA".to_string()));
            }
            records.push(transferred);
        }

        if self.messages == 0 && records.is_empty() {
            return Err(self.failure("Empty transfer response".to_string()));
        }

        self.messages += 1;
        if self.soa_seen >= 2 {
            self.finished = true;
            debug!(
                zone = %self.zone,
                messages = self.messages,
                "Transfer complete"
            );
        }

        Ok(Some(ZoneEnvelope::new(records)))
    }

    fn failure(&self, reason: String) -> DomainError {
        DomainError::ZoneTransferFailed {
            zone: self.zone.clone(),
            server: self.server.clone(),
            reason,
        }
    }
}
