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

use crate::database::{accommodations_repo, stops_repo};
use crate::services::activity_log_service;
use crate::web::middleware::auth::TripSession;
use crate::web::routes::{bad_request, internal_error, not_found, optional, required};

pub async fn list_accommodations_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
) -> Response {
    match accommodations_repo::list_accommodations(&pool, &session.trip_id).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            warn!("Accommodation list failed: {}", e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateAccommodationPayload {
    pub stop_id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub booking_ref: Option<String>,
    pub price_cents: Option<i64>,
    pub url: Option<String>,
}

pub async fn create_accommodation_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateAccommodationPayload>,
) -> Response {
    let Some(name) = required(&payload.name) else {
        return bad_request("name is required");
    };
    // A reservation always hangs off a stop.
    let Some(stop_id) = required(&payload.stop_id) else {
        return bad_request("stop_id is required");
    };
    match stops_repo::get_stop_in_trip(&pool, stop_id, &session.trip_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return not_found("stop not found"),
        Err(e) => {
            warn!("Stop lookup failed for {}: {}", stop_id, e);
            return internal_error();
        }
    }

    let id = Uuid::now_v7().to_string();
    let result = accommodations_repo::insert_accommodation(
        &pool,
        accommodations_repo::NewAccommodation {
            id: &id,
            trip_id: &session.trip_id,
            stop_id,
            name,
            address: optional(&payload.address),
            check_in: optional(&payload.check_in),
            check_out: optional(&payload.check_out),
            booking_ref: optional(&payload.booking_ref),
            price_cents: payload.price_cents,
            url: optional(&payload.url),
        },
    )
    .await;
    if let Err(e) = result {
        warn!("Accommodation create failed: {}", e);
        return internal_error();
    }

    activity_log_service::record(
        &pool,
        &session.trip_id,
        Some(&session.traveler_id),
        "created",
        "accommodation",
        Some(&id),
        Some(name),
    )
    .await;

    match accommodations_repo::get_accommodation_in_trip(&pool, &id, &session.trip_id).await {
        Ok(Some(row)) => (StatusCode::CREATED, Json(row)).into_response(),
        Ok(None) => internal_error(),
        Err(e) => {
            warn!("Accommodation reload failed for {}: {}", id, e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccommodationPayload {
    pub stop_id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub booking_ref: Option<String>,
    pub price_cents: Option<i64>,
    pub url: Option<String>,
}

pub async fn update_accommodation_handler(
    Extension(session): Extension<TripSession>,
    Path(accommodation_id): Path<String>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<UpdateAccommodationPayload>,
) -> Response {
    if let Some(stop_id) = optional(&payload.stop_id) {
        match stops_repo::get_stop_in_trip(&pool, stop_id, &session.trip_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return not_found("stop not found"),
            Err(e) => {
                warn!("Stop lookup failed for {}: {}", stop_id, e);
                return internal_error();
            }
        }
    }

    let affected = match accommodations_repo::update_accommodation(
        &pool,
        &accommodation_id,
        &session.trip_id,
        accommodations_repo::UpdateAccommodation {
            stop_id: optional(&payload.stop_id),
            name: optional(&payload.name),
            address: optional(&payload.address),
            check_in: optional(&payload.check_in),
            check_out: optional(&payload.check_out),
            booking_ref: optional(&payload.booking_ref),
            price_cents: payload.price_cents,
            url: optional(&payload.url),
        },
    )
    .await
    {
        Ok(n) => n,
        Err(e) => {
            warn!("Accommodation update failed for {}: {}", accommodation_id, e);
            return internal_error();
        }
    };
    if affected == 0 {
        return not_found("accommodation not found");
    }

    activity_log_service::record(
        &pool,
        &session.trip_id,
        Some(&session.traveler_id),
        "updated",
        "accommodation",
        Some(&accommodation_id),
        None,
    )
    .await;

    match accommodations_repo::get_accommodation_in_trip(&pool, &accommodation_id, &session.trip_id)
        .await
    {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => not_found("accommodation not found"),
        Err(e) => {
            warn!("Accommodation reload failed for {}: {}", accommodation_id, e);
            internal_error()
        }
    }
}

pub async fn delete_accommodation_handler(
    Extension(session): Extension<TripSession>,
    Path(accommodation_id): Path<String>,
    State(pool): State<SqlitePool>,
) -> Response {
    match accommodations_repo::delete_accommodation(&pool, &accommodation_id, &session.trip_id)
        .await
    {
        Ok(0) => not_found("accommodation not found"),
        Ok(_) => {
            activity_log_service::record(
                &pool,
                &session.trip_id,
                Some(&session.traveler_id),
                "deleted",
                "accommodation",
                Some(&accommodation_id),
                None,
            )
            .await;
            Json(json!({ "ok": true })).into_response()
        }
        Err(e) => {
            warn!("Accommodation delete failed for {}: {}", accommodation_id, e);
            internal_error()
        }
    }
}
