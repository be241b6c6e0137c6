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

use crate::database::{notes_repo, stops_repo};
use crate::services::activity_log_service;
use crate::web::middleware::auth::TripSession;
use crate::web::routes::{bad_request, internal_error, not_found, optional, required};

pub async fn list_notes_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
) -> Response {
    match notes_repo::list_notes(&pool, &session.trip_id).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            warn!("Note list failed: {}", e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateNotePayload {
    pub stop_id: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub pinned: Option<bool>,
}

pub async fn create_note_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateNotePayload>,
) -> Response {
    let Some(title) = required(&payload.title) else {
        return bad_request("title is required");
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
    let result = notes_repo::insert_note(
        &pool,
        notes_repo::NewNote {
            id: &id,
            trip_id: &session.trip_id,
            stop_id: optional(&payload.stop_id),
            author_id: Some(&session.traveler_id),
            title,
            body: payload.body.as_deref().unwrap_or(""),
            pinned: payload.pinned.unwrap_or(false) as i64,
        },
    )
    .await;
    if let Err(e) = result {
        warn!("Note create failed: {}", e);
        return internal_error();
    }

    activity_log_service::record(
        &pool,
        &session.trip_id,
        Some(&session.traveler_id),
        "created",
        "note",
        Some(&id),
        Some(title),
    )
    .await;

    match notes_repo::get_note_in_trip(&pool, &id, &session.trip_id).await {
        Ok(Some(row)) => (StatusCode::CREATED, Json(row)).into_response(),
        Ok(None) => internal_error(),
        Err(e) => {
            warn!("Note reload failed for {}: {}", id, e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateNotePayload {
    pub stop_id: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub pinned: Option<bool>,
}

pub async fn update_note_handler(
    Extension(session): Extension<TripSession>,
    Path(note_id): Path<String>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<UpdateNotePayload>,
) -> Response {
    let affected = match notes_repo::update_note(
        &pool,
        &note_id,
        &session.trip_id,
        notes_repo::UpdateNote {
            stop_id: optional(&payload.stop_id),
            title: optional(&payload.title),
            body: payload.body.as_deref(),
            pinned: payload.pinned.map(|p| p as i64),
        },
    )
    .await
    {
        Ok(n) => n,
        Err(e) => {
            warn!("Note update failed for {}: {}", note_id, e);
            return internal_error();
        }
    };
    if affected == 0 {
        return not_found("note not found");
    }

    activity_log_service::record(
        &pool,
        &session.trip_id,
        Some(&session.traveler_id),
        "updated",
        "note",
        Some(&note_id),
        None,
    )
    .await;

    match notes_repo::get_note_in_trip(&pool, &note_id, &session.trip_id).await {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => not_found("note not found"),
        Err(e) => {
            warn!("Note reload failed for {}: {}", note_id, e);
            internal_error()
        }
    }
}

pub async fn delete_note_handler(
    Extension(session): Extension<TripSession>,
    Path(note_id): Path<String>,
    State(pool): State<SqlitePool>,
) -> Response {
    match notes_repo::delete_note(&pool, &note_id, &session.trip_id).await {
        Ok(0) => not_found("note not found"),
        Ok(_) => {
            activity_log_service::record(
                &pool,
                &session.trip_id,
                Some(&session.traveler_id),
                "deleted",
                "note",
                Some(&note_id),
                None,
            )
            .await;
            Json(json!({ "ok": true })).into_response()
        }
        Err(e) => {
            warn!("Note delete failed for {}: {}", note_id, e);
            internal_error()
        }
    }
}
