pub mod accommodations;
pub mod activity;
pub mod checklist;
pub mod expenses;
pub mod export;
pub mod itinerary;
pub mod matches;
pub mod notes;
pub mod photos;
pub mod polls;
pub mod predictions;
pub mod stops;
pub mod travelers;
pub mod trips;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub(crate) fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

pub(crate) fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
}

pub(crate) fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "internal error" })),
    )
        .into_response()
}

/// Treats missing and whitespace-only strings the same; every required text
/// field goes through this.
pub(crate) fn required<'a>(value: &'a Option<String>) -> Option<&'a str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Optional text field: blank input means "not provided".
pub(crate) fn optional(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
