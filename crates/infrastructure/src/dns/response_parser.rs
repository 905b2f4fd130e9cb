use gethost_domain::{DomainError, TransferredData, TransferredRecord};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use std::net::IpAddr;

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a wire message and rejects anything but NOERROR.
    pub fn parse(response_bytes: &[u8]) -> Result<Message, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        if rcode != ResponseCode::NoError {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Server answered {}",
                Self::rcode_to_status(rcode)
            )));
        }

        Ok(message)
    }

    pub fn transferred_record(record: &Record) -> TransferredRecord {
        let data = match record.data() {
            RData::A(a) => TransferredData::A(IpAddr::V4(a.0)),
            RData::AAAA(aaaa) => TransferredData::Aaaa(IpAddr::V6(aaaa.0)),
            RData::CNAME(canonical) => TransferredData::Cname(canonical.to_utf8()),
            RData::SOA(soa) => TransferredData::Soa {
                serial: soa.serial(),
            },
            _ => TransferredData::Other(record.record_type().to_string()),
        };

        TransferredRecord::new(record.name().to_utf8(), record.ttl(), data)
    }

    /// First NS target among the answers.
    pub fn first_nameserver(message: &Message) -> Option<String> {
        message.answers().iter().find_map(|record| match record.data() {
            RData::NS(ns) => Some(ns.to_utf8()),
            _ => None,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::NotAuth => "NOTAUTH",
            _ => "UNKNOWN",
        }
    }
}
