use crate::dto::VersionInfo;
use gethost_application::use_cases::{GetCacheStatusUseCase, LookupHostsUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lookup_hosts: Arc<LookupHostsUseCase>,
    pub get_status: Arc<GetCacheStatusUseCase>,
    pub version: Arc<VersionInfo>,
}
