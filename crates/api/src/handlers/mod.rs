pub mod hosts;
pub mod status;
pub mod version;

pub use hosts::{list_hosts, lookup_hosts, lookup_hosts_with_flag};
pub use status::get_status;
pub use version::get_version;
