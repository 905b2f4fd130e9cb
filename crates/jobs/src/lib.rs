pub mod runner;
pub mod zone_refresh;

pub use runner::JobRunner;
pub use zone_refresh::ZoneRefreshJob;
