pub mod hosts;
pub mod status;
pub mod version;

pub use hosts::HostsQuery;
pub use status::StatusReport;
pub use version::VersionInfo;
