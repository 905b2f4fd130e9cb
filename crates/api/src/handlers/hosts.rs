use crate::{
    dto::HostsQuery, errors::ApiError, state::AppState, utils::validate_fragment,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{debug, instrument};

const NO_CACHE_FLAG: &str = "nc";

/// `/hosts[?fragment=..][&nc=true]`. Without a fragment every cached host is listed.
#[instrument(skip(state), name = "api_list_hosts")]
pub async fn list_hosts(
    State(state): State<AppState>,
    Query(params): Query<HostsQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    let fragment = params.fragment.as_deref().unwrap_or_default();
    validate_fragment(fragment)?;

    let hosts = state.lookup_hosts.execute(fragment, params.nc).await;
    debug!(fragment = %fragment, matches = hosts.len(), "Sending matches");
    Ok(Json(hosts))
}

#[instrument(skip(state), name = "api_lookup_hosts")]
pub async fn lookup_hosts(
    State(state): State<AppState>,
    Path(fragment): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    validate_fragment(&fragment)?;

    let hosts = state.lookup_hosts.execute(&fragment, false).await;
    debug!(fragment = %fragment, matches = hosts.len(), "Sending matches");
    Ok(Json(hosts))
}

/// `/hosts/{fragment}/nc` forces a refresh; any other trailing segment is a plain lookup.
#[instrument(skip(state), name = "api_lookup_hosts_flag")]
pub async fn lookup_hosts_with_flag(
    State(state): State<AppState>,
    Path((fragment, flag)): Path<(String, String)>,
) -> Result<Json<Vec<String>>, ApiError> {
    validate_fragment(&fragment)?;

    let force_refresh = flag == NO_CACHE_FLAG;
    if force_refresh {
        debug!(fragment = %fragment, "Got no-cache flag");
    }

    let hosts = state.lookup_hosts.execute(&fragment, force_refresh).await;
    debug!(fragment = %fragment, matches = hosts.len(), "Sending matches");
    Ok(Json(hosts))
}
