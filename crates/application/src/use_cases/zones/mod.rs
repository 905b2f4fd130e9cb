mod build_snapshot;
mod fetch_zone;
mod refresh_zones;

pub use build_snapshot::BuildSnapshotUseCase;
pub use fetch_zone::FetchZoneUseCase;
pub use refresh_zones::{RefreshOutcome, RefreshZonesUseCase};
