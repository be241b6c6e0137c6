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

use crate::database::{photos_repo, stops_repo};
use crate::web::middleware::auth::TripSession;
use crate::web::routes::{bad_request, internal_error, not_found, optional, required};

pub async fn list_photos_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
) -> Response {
    match photos_repo::list_photos(&pool, &session.trip_id).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            warn!("Photo list failed: {}", e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePhotoPayload {
    pub stop_id: Option<String>,
    pub url: Option<String>,
    pub caption: Option<String>,
    pub taken_at: Option<String>,
}

pub async fn create_photo_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreatePhotoPayload>,
) -> Response {
    let Some(url) = required(&payload.url) else {
        return bad_request("url is required");
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
    let result = photos_repo::insert_photo(
        &pool,
        photos_repo::NewPhoto {
            id: &id,
            trip_id: &session.trip_id,
            stop_id: optional(&payload.stop_id),
            uploader_id: Some(&session.traveler_id),
            url,
            caption: optional(&payload.caption),
            taken_at: optional(&payload.taken_at),
        },
    )
    .await;
    if let Err(e) = result {
        warn!("Photo create failed: {}", e);
        return internal_error();
    }

    match photos_repo::get_photo_in_trip(&pool, &id, &session.trip_id).await {
        Ok(Some(row)) => (StatusCode::CREATED, Json(row)).into_response(),
        Ok(None) => internal_error(),
        Err(e) => {
            warn!("Photo reload failed for {}: {}", id, e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePhotoPayload {
    pub stop_id: Option<String>,
    pub caption: Option<String>,
    pub taken_at: Option<String>,
}

pub async fn update_photo_handler(
    Extension(session): Extension<TripSession>,
    Path(photo_id): Path<String>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<UpdatePhotoPayload>,
) -> Response {
    let affected = match photos_repo::update_photo(
        &pool,
        &photo_id,
        &session.trip_id,
        photos_repo::UpdatePhoto {
            stop_id: optional(&payload.stop_id),
            caption: optional(&payload.caption),
            taken_at: optional(&payload.taken_at),
        },
    )
    .await
    {
        Ok(n) => n,
        Err(e) => {
            warn!("Photo update failed for {}: {}", photo_id, e);
            return internal_error();
        }
    };
    if affected == 0 {
        return not_found("photo not found");
    }

    match photos_repo::get_photo_in_trip(&pool, &photo_id, &session.trip_id).await {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => not_found("photo not found"),
        Err(e) => {
            warn!("Photo reload failed for {}: {}", photo_id, e);
            internal_error()
        }
    }
}

pub async fn delete_photo_handler(
    Extension(session): Extension<TripSession>,
    Path(photo_id): Path<String>,
    State(pool): State<SqlitePool>,
) -> Response {
    match photos_repo::delete_photo(&pool, &photo_id, &session.trip_id).await {
        Ok(0) => not_found("photo not found"),
        Ok(_) => Json(json!({ "ok": true })).into_response(),
        Err(e) => {
            warn!("Photo delete failed for {}: {}", photo_id, e);
            internal_error()
        }
    }
}
