use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Client input error. Always answered with 400 and the fixed public message.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] days_core::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected request: {}", self.0);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: self.0.public_message().to_string(),
            }),
        )
            .into_response()
    }
}
