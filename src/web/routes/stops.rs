use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::warn;
use uuid::Uuid;

use crate::database::stops_repo;
use crate::services::activity_log_service;
use crate::web::middleware::auth::TripSession;
use crate::web::routes::{bad_request, internal_error, not_found, optional, required};

pub async fn list_stops_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
) -> Response {
    match stops_repo::list_stops(&pool, &session.trip_id).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            warn!("Stop list failed: {}", e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateStopPayload {
    pub city: Option<String>,
    pub country: Option<String>,
    pub arrival_date: Option<String>,
    pub departure_date: Option<String>,
    pub position: Option<i64>,
    pub notes: Option<String>,
}

pub async fn create_stop_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateStopPayload>,
) -> Response {
    let Some(city) = required(&payload.city) else {
        return bad_request("city is required");
    };

    let id = Uuid::now_v7().to_string();
    let result = stops_repo::insert_stop(
        &pool,
        stops_repo::NewStop {
            id: &id,
            trip_id: &session.trip_id,
            city,
            country: optional(&payload.country),
            arrival_date: optional(&payload.arrival_date),
            departure_date: optional(&payload.departure_date),
            position: payload.position.unwrap_or(0),
            notes: optional(&payload.notes),
        },
    )
    .await;
    if let Err(e) = result {
        warn!("Stop create failed: {}", e);
        return internal_error();
    }

    activity_log_service::record(
        &pool,
        &session.trip_id,
        Some(&session.traveler_id),
        "created",
        "stop",
        Some(&id),
        Some(city),
    )
    .await;

    match stops_repo::get_stop_in_trip(&pool, &id, &session.trip_id).await {
        Ok(Some(row)) => (StatusCode::CREATED, Json(row)).into_response(),
        Ok(None) => internal_error(),
        Err(e) => {
            warn!("Stop reload failed for {}: {}", id, e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStopPayload {
    pub city: Option<String>,
    pub country: Option<String>,
    pub arrival_date: Option<String>,
    pub departure_date: Option<String>,
    pub position: Option<i64>,
    pub notes: Option<String>,
}

pub async fn update_stop_handler(
    Extension(session): Extension<TripSession>,
    Path(stop_id): Path<String>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<UpdateStopPayload>,
) -> Response {
    let affected = match stops_repo::update_stop(
        &pool,
        &stop_id,
        &session.trip_id,
        stops_repo::UpdateStop {
            city: optional(&payload.city),
            country: optional(&payload.country),
            arrival_date: optional(&payload.arrival_date),
            departure_date: optional(&payload.departure_date),
            position: payload.position,
            notes: optional(&payload.notes),
        },
    )
    .await
    {
        Ok(n) => n,
        Err(e) => {
            warn!("Stop update failed for {}: {}", stop_id, e);
            return internal_error();
        }
    };
    if affected == 0 {
        return not_found("stop not found");
    }

    activity_log_service::record(
        &pool,
        &session.trip_id,
        Some(&session.traveler_id),
        "updated",
        "stop",
        Some(&stop_id),
        None,
    )
    .await;

    match stops_repo::get_stop_in_trip(&pool, &stop_id, &session.trip_id).await {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => not_found("stop not found"),
        Err(e) => {
            warn!("Stop reload failed for {}: {}", stop_id, e);
            internal_error()
        }
    }
}

pub async fn delete_stop_handler(
    Extension(session): Extension<TripSession>,
    Path(stop_id): Path<String>,
    State(pool): State<SqlitePool>,
) -> Response {
    match stops_repo::delete_stop(&pool, &stop_id, &session.trip_id).await {
        Ok(0) => not_found("stop not found"),
        Ok(_) => {
            activity_log_service::record(
                &pool,
                &session.trip_id,
                Some(&session.traveler_id),
                "deleted",
                "stop",
                Some(&stop_id),
                None,
            )
            .await;
            Json(json!({ "ok": true })).into_response()
        }
        Err(e) => {
            warn!("Stop delete failed for {}: {}", stop_id, e);
            internal_error()
        }
    }
}
