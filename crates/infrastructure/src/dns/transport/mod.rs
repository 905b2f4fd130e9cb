pub mod resolver;
pub mod tcp;
pub mod udp;

pub use udp::UdpTransport;
