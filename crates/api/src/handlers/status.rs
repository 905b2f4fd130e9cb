use crate::{dto::StatusReport, state::AppState};
use axum::extract::State;
use tracing::instrument;

#[instrument(skip(state), name = "api_get_status")]
pub async fn get_status(State(state): State<AppState>) -> String {
    let status = state.get_status.execute();
    StatusReport(&status).render()
}
