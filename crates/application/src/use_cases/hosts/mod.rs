mod lookup_hosts;
mod resolve_hosts;

pub use lookup_hosts::LookupHostsUseCase;
pub use resolve_hosts::{HostResolution, HostSource, ResolveHostsUseCase};
