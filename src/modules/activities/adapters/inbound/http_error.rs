use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::errors::DecideError;

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDetail {
            detail: detail.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::Domain(DecideError::ActivityNotFound) => StatusCode::NOT_FOUND,
            ApplicationError::Domain(_) => StatusCode::BAD_REQUEST,
            ApplicationError::Store(e) => {
                tracing::error!(error = %e, "activity store failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        error_response(status, self.to_string())
    }
}
