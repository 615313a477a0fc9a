use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::activities::adapters::inbound::http_error::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_activities().await {
        Ok(catalog) => Json(catalog).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "listing activities failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
