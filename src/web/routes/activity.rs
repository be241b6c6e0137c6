use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::activity_log_service;
use crate::web::middleware::auth::TripSession;
use crate::web::routes::internal_error;

#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    limit: Option<i64>,
}

pub async fn activity_handler(
    Extension(session): Extension<TripSession>,
    Query(query): Query<ActivityQuery>,
    State(pool): State<SqlitePool>,
) -> Response {
    let limit = query.limit.unwrap_or(50).clamp(1, 200);
    match activity_log_service::recent(&pool, &session.trip_id, limit).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            warn!("Activity list failed: {}", e);
            internal_error()
        }
    }
}
