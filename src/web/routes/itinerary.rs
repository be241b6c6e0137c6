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

use crate::database::{itinerary_repo, stops_repo};
use crate::services::activity_log_service;
use crate::web::middleware::auth::TripSession;
use crate::web::routes::{bad_request, internal_error, not_found, optional, required};

pub async fn list_itinerary_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
) -> Response {
    match itinerary_repo::list_itinerary_items(&pool, &session.trip_id).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            warn!("Itinerary list failed: {}", e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateItineraryPayload {
    pub stop_id: Option<String>,
    pub title: Option<String>,
    pub day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub kind: Option<String>,
    pub notes: Option<String>,
}

pub async fn create_itinerary_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateItineraryPayload>,
) -> Response {
    let Some(title) = required(&payload.title) else {
        return bad_request("title is required");
    };
    let Some(day) = required(&payload.day) else {
        return bad_request("day is required");
    };

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

    let id = Uuid::now_v7().to_string();
    let result = itinerary_repo::insert_itinerary_item(
        &pool,
        itinerary_repo::NewItineraryItem {
            id: &id,
            trip_id: &session.trip_id,
            stop_id: optional(&payload.stop_id),
            title,
            day,
            start_time: optional(&payload.start_time),
            end_time: optional(&payload.end_time),
            kind: optional(&payload.kind),
            notes: optional(&payload.notes),
        },
    )
    .await;
    if let Err(e) = result {
        warn!("Itinerary create failed: {}", e);
        return internal_error();
    }

    match itinerary_repo::get_itinerary_item_in_trip(&pool, &id, &session.trip_id).await {
        Ok(Some(row)) => (StatusCode::CREATED, Json(row)).into_response(),
        Ok(None) => internal_error(),
        Err(e) => {
            warn!("Itinerary reload failed for {}: {}", id, e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateItineraryPayload {
    pub stop_id: Option<String>,
    pub title: Option<String>,
    pub day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub kind: Option<String>,
    pub notes: Option<String>,
}

pub async fn update_itinerary_handler(
    Extension(session): Extension<TripSession>,
    Path(item_id): Path<String>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<UpdateItineraryPayload>,
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

    let affected = match itinerary_repo::update_itinerary_item(
        &pool,
        &item_id,
        &session.trip_id,
        itinerary_repo::UpdateItineraryItem {
            stop_id: optional(&payload.stop_id),
            title: optional(&payload.title),
            day: optional(&payload.day),
            start_time: optional(&payload.start_time),
            end_time: optional(&payload.end_time),
            kind: optional(&payload.kind),
            notes: optional(&payload.notes),
        },
    )
    .await
    {
        Ok(n) => n,
        Err(e) => {
            warn!("Itinerary update failed for {}: {}", item_id, e);
            return internal_error();
        }
    };
    if affected == 0 {
        return not_found("itinerary item not found");
    }

    match itinerary_repo::get_itinerary_item_in_trip(&pool, &item_id, &session.trip_id).await {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => not_found("itinerary item not found"),
        Err(e) => {
            warn!("Itinerary reload failed for {}: {}", item_id, e);
            internal_error()
        }
    }
}

pub async fn delete_itinerary_handler(
    Extension(session): Extension<TripSession>,
    Path(item_id): Path<String>,
    State(pool): State<SqlitePool>,
) -> Response {
    match itinerary_repo::delete_itinerary_item(&pool, &item_id, &session.trip_id).await {
        Ok(0) => not_found("itinerary item not found"),
        Ok(_) => {
            activity_log_service::record(
                &pool,
                &session.trip_id,
                Some(&session.traveler_id),
                "deleted",
                "itinerary_item",
                Some(&item_id),
                None,
            )
            .await;
            Json(json!({ "ok": true })).into_response()
        }
        Err(e) => {
            warn!("Itinerary delete failed for {}: {}", item_id, e);
            internal_error()
        }
    }
}
