pub mod axfr;
pub mod message_builder;
pub mod nameserver;
pub mod response_parser;
pub mod transport;

pub use axfr::AxfrZoneTransfer;
pub use message_builder::MessageBuilder;
pub use nameserver::{
    resolver_from_config, LazyNameserverResolver, StaticNameserverResolver,
    SystemNameserverResolver,
};
pub use response_parser::ResponseParser;

/// Port used for both NS discovery and zone transfers.
pub const DNS_PORT: u16 = 53;
