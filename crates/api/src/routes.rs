use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/hosts", get(handlers::list_hosts))
        .route("/hosts/{fragment}", get(handlers::lookup_hosts))
        .route("/hosts/{fragment}/{flag}", get(handlers::lookup_hosts_with_flag))
        .route("/status", get(handlers::get_status))
        .route("/version", get(handlers::get_version))
        .with_state(state)
}
