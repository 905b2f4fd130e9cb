use arc_swap::ArcSwapOption;
use gethost_application::ports::{CachedSnapshot, ZoneCachePort};
use gethost_domain::ZoneSnapshot;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

struct InstalledSnapshot {
    snapshot: Arc<ZoneSnapshot>,
    installed_at: Instant,
}

/// Lock-free holder of the current snapshot.
///
/// The snapshot and its install time are swapped as one pointer, so readers never see a
/// new snapshot paired with the old age. Writers are serialized upstream by
/// `RefreshZonesUseCase`.
pub struct ZoneCache {
    current: ArcSwapOption<InstalledSnapshot>,
}

impl ZoneCache {
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::empty(),
        }
    }
}

impl Default for ZoneCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneCachePort for ZoneCache {
    fn load(&self) -> Option<CachedSnapshot> {
        self.current.load_full().map(|installed| CachedSnapshot {
            snapshot: Arc::clone(&installed.snapshot),
            age: installed.installed_at.elapsed(),
        })
    }

    fn replace(&self, snapshot: ZoneSnapshot) {
        let hosts = snapshot.len();
        let built_at = snapshot.created_at();
        self.current.store(Some(Arc::new(InstalledSnapshot {
            snapshot: Arc::new(snapshot),
            installed_at: Instant::now(),
        })));
        debug!(hosts, built_at = %built_at, "Snapshot installed");
    }
}
