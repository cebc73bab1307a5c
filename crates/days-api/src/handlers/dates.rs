use axum::{extract::State, http::Method, Json};
use days_core::{days_between, parse_value, weekday_of, HistoryRecord};
use serde::{Deserialize, Serialize};

use super::route;
use crate::{error::ApiError, extract::Fields, state::ApiState};

#[derive(Debug, Serialize, Deserialize)]
pub struct BetweenResponse {
    pub days: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeekdayResponse {
    pub weekday: String,
}

/// Signed day count from `first` to `last`, both `DD.MM.YYYY`.
pub async fn between(
    State(state): State<ApiState>,
    method: Method,
    Fields(fields): Fields,
) -> Result<Json<BetweenResponse>, ApiError> {
    // Both fields must be present before either is parsed.
    let first = fields.require("first")?;
    let last = fields.require("last")?;

    let first = parse_value(first)?;
    let last = parse_value(last)?;

    let days = days_between(first, last);

    state.ledger.record(HistoryRecord::now(method.as_str(), route::BETWEEN));

    Ok(Json(BetweenResponse { days }))
}

/// Weekday name of `date`, `DD.MM.YYYY`.
pub async fn weekday(
    State(state): State<ApiState>,
    method: Method,
    Fields(fields): Fields,
) -> Result<Json<WeekdayResponse>, ApiError> {
    let date = parse_value(fields.require("date")?)?;

    state.ledger.record(HistoryRecord::now(method.as_str(), route::WEEKDAY));

    Ok(Json(WeekdayResponse {
        weekday: weekday_of(date).to_string(),
    }))
}
