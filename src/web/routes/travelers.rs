use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::warn;

use crate::database::travelers_repo;
use crate::web::middleware::auth::TripSession;
use crate::web::routes::{internal_error, not_found, optional};

pub async fn list_travelers_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
) -> Response {
    match travelers_repo::list_travelers(&pool, &session.trip_id).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            warn!("Traveler list failed: {}", e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateTravelerPayload {
    pub name: Option<String>,
    pub color: Option<String>,
}

pub async fn update_traveler_handler(
    Extension(session): Extension<TripSession>,
    Path(traveler_id): Path<String>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<UpdateTravelerPayload>,
) -> Response {
    let affected = match travelers_repo::update_traveler(
        &pool,
        &traveler_id,
        &session.trip_id,
        optional(&payload.name),
        optional(&payload.color),
    )
    .await
    {
        Ok(n) => n,
        Err(e) => {
            warn!("Traveler update failed for {}: {}", traveler_id, e);
            return internal_error();
        }
    };
    if affected == 0 {
        return not_found("traveler not found");
    }

    match travelers_repo::get_traveler_in_trip(&pool, &traveler_id, &session.trip_id).await {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => not_found("traveler not found"),
        Err(e) => {
            warn!("Traveler reload failed for {}: {}", traveler_id, e);
            internal_error()
        }
    }
}
