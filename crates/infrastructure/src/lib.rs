//! Adapters behind the application ports: the in-memory zone cache, AXFR and NS lookups
//! over the wire, and the HTTP client for a running server.
pub mod cache;
pub mod dns;
pub mod http;
