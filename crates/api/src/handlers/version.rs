use crate::state::AppState;
use axum::extract::State;

pub async fn get_version(State(state): State<AppState>) -> String {
    state.version.render()
}
