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

use crate::database::{checklist_repo, travelers_repo};
use crate::services::activity_log_service;
use crate::web::middleware::auth::TripSession;
use crate::web::routes::{bad_request, internal_error, not_found, optional, required};

pub async fn list_checklist_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
) -> Response {
    match checklist_repo::list_checklist_items(&pool, &session.trip_id).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            warn!("Checklist list failed: {}", e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateChecklistPayload {
    pub label: Option<String>,
    pub category: Option<String>,
    // null/absent = shared item for the whole group
    pub traveler_id: Option<String>,
}

pub async fn create_checklist_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateChecklistPayload>,
) -> Response {
    let Some(label) = required(&payload.label) else {
        return bad_request("label is required");
    };

    if let Some(traveler_id) = optional(&payload.traveler_id) {
        match travelers_repo::get_traveler_in_trip(&pool, traveler_id, &session.trip_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return not_found("traveler not found"),
            Err(e) => {
                warn!("Traveler lookup failed for {}: {}", traveler_id, e);
                return internal_error();
            }
        }
    }

    let id = Uuid::now_v7().to_string();
    let result = checklist_repo::insert_checklist_item(
        &pool,
        checklist_repo::NewChecklistItem {
            id: &id,
            trip_id: &session.trip_id,
            traveler_id: optional(&payload.traveler_id),
            label,
            category: optional(&payload.category),
        },
    )
    .await;
    if let Err(e) = result {
        warn!("Checklist create failed: {}", e);
        return internal_error();
    }

    activity_log_service::record(
        &pool,
        &session.trip_id,
        Some(&session.traveler_id),
        "created",
        "checklist_item",
        Some(&id),
        Some(label),
    )
    .await;

    match checklist_repo::get_checklist_item_in_trip(&pool, &id, &session.trip_id).await {
        Ok(Some(row)) => (StatusCode::CREATED, Json(row)).into_response(),
        Ok(None) => internal_error(),
        Err(e) => {
            warn!("Checklist reload failed for {}: {}", id, e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateChecklistPayload {
    pub label: Option<String>,
    pub category: Option<String>,
    pub traveler_id: Option<String>,
}

pub async fn update_checklist_handler(
    Extension(session): Extension<TripSession>,
    Path(item_id): Path<String>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<UpdateChecklistPayload>,
) -> Response {
    let affected = match checklist_repo::update_checklist_item(
        &pool,
        &item_id,
        &session.trip_id,
        checklist_repo::UpdateChecklistItem {
            label: optional(&payload.label),
            category: optional(&payload.category),
            traveler_id: optional(&payload.traveler_id),
        },
    )
    .await
    {
        Ok(n) => n,
        Err(e) => {
            warn!("Checklist update failed for {}: {}", item_id, e);
            return internal_error();
        }
    };
    if affected == 0 {
        return not_found("checklist item not found");
    }

    activity_log_service::record(
        &pool,
        &session.trip_id,
        Some(&session.traveler_id),
        "updated",
        "checklist_item",
        Some(&item_id),
        None,
    )
    .await;

    match checklist_repo::get_checklist_item_in_trip(&pool, &item_id, &session.trip_id).await {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => not_found("checklist item not found"),
        Err(e) => {
            warn!("Checklist reload failed for {}: {}", item_id, e);
            internal_error()
        }
    }
}

pub async fn toggle_checklist_handler(
    Extension(session): Extension<TripSession>,
    Path(item_id): Path<String>,
    State(pool): State<SqlitePool>,
) -> Response {
    match checklist_repo::toggle_checklist_item(&pool, &item_id, &session.trip_id).await {
        Ok(0) => return not_found("checklist item not found"),
        Ok(_) => {}
        Err(e) => {
            warn!("Checklist toggle failed for {}: {}", item_id, e);
            return internal_error();
        }
    }

    activity_log_service::record(
        &pool,
        &session.trip_id,
        Some(&session.traveler_id),
        "toggled",
        "checklist_item",
        Some(&item_id),
        None,
    )
    .await;

    match checklist_repo::get_checklist_item_in_trip(&pool, &item_id, &session.trip_id).await {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => not_found("checklist item not found"),
        Err(e) => {
            warn!("Checklist reload failed for {}: {}", item_id, e);
            internal_error()
        }
    }
}

pub async fn delete_checklist_handler(
    Extension(session): Extension<TripSession>,
    Path(item_id): Path<String>,
    State(pool): State<SqlitePool>,
) -> Response {
    match checklist_repo::delete_checklist_item(&pool, &item_id, &session.trip_id).await {
        Ok(0) => not_found("checklist item not found"),
        Ok(_) => {
            activity_log_service::record(
                &pool,
                &session.trip_id,
                Some(&session.traveler_id),
                "deleted",
                "checklist_item",
                Some(&item_id),
                None,
            )
            .await;
            Json(json!({ "ok": true })).into_response()
        }
        Err(e) => {
            warn!("Checklist delete failed for {}: {}", item_id, e);
            internal_error()
        }
    }
}
