//! Constructs query messages in wire format using `hickory-proto`.

use gethost_domain::DomainError;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Recursive NS question, sent to the host's resolver.
    pub fn build_ns_query(zone: &str) -> Result<Vec<u8>, DomainError> {
        Self::build_query(zone, RecordType::NS, true)
    }

    /// Full zone transfer request. Sent straight to an authoritative server, so no RD bit.
    pub fn build_axfr_query(zone: &str) -> Result<Vec<u8>, DomainError> {
        Self::build_query(zone, RecordType::AXFR, false)
    }

    fn build_query(
        zone: &str,
        record_type: RecordType,
        recursion_desired: bool,
    ) -> Result<Vec<u8>, DomainError> {
        let name = Name::from_str(zone)
            .map_err(|e| DomainError::InvalidZoneName(format!("{}: {}", zone, e)))?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(record_type);
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
        message.set_recursion_desired(recursion_desired);
        message.add_query(query);

        Self::serialize_message(&message)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
