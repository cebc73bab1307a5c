use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn index() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the Days API.".to_string(),
    })
}
