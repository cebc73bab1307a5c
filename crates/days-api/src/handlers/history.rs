use axum::{
    extract::{Query, State},
    http::Method,
    Json,
};
use days_core::{HistoryRecord, PageSize};
use serde::{Deserialize, Serialize};

use super::route;
use crate::{error::ApiError, state::ApiState};

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Most recent requests first. `number` picks the page size (default 5);
/// when it is repeated, the first value counts.
///
/// Viewing the history is itself recorded, and the record is appended before
/// the page is sliced, so it shows up as the first entry.
pub async fn get_history(
    State(state): State<ApiState>,
    method: Method,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<HistoryRecord>>, ApiError> {
    let number = params
        .iter()
        .find(|(key, _)| key == "number")
        .map(|(_, value)| value.as_str());
    let page_size = PageSize::parse(number)?;

    let page = state.ledger.record_then_recent(
        HistoryRecord::now(method.as_str(), route::HISTORY),
        page_size.get(),
    );

    Ok(Json(page))
}

/// Drop all recorded history.
pub async fn clear_history(State(state): State<ApiState>) -> Json<StatusResponse> {
    state.ledger.clear();

    Json(StatusResponse {
        status: "History cleared".to_string(),
    })
}
