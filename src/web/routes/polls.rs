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

use crate::database::polls_repo;
use crate::services::activity_log_service;
use crate::services::poll_service::{self, VoteError};
use crate::web::middleware::auth::TripSession;
use crate::web::routes::{bad_request, internal_error, not_found, required};

pub async fn list_polls_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
) -> Response {
    match poll_service::list_polls_with_results(&pool, &session.trip_id, &session.traveler_id).await
    {
        Ok(polls) => Json(polls).into_response(),
        Err(e) => {
            warn!("Poll list failed: {}", e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePollPayload {
    pub question: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    pub multi: Option<bool>,
}

pub async fn create_poll_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreatePollPayload>,
) -> Response {
    let Some(question) = required(&payload.question) else {
        return bad_request("question is required");
    };
    let options: Vec<String> = payload
        .options
        .iter()
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect();
    if options.len() < 2 {
        return bad_request("at least two options are required");
    }

    let poll = match poll_service::create_poll(
        &pool,
        &session.trip_id,
        &session.traveler_id,
        question,
        &options,
        payload.multi.unwrap_or(false),
    )
    .await
    {
        Ok(row) => row,
        Err(e) => {
            warn!("Poll create failed: {}", e);
            return internal_error();
        }
    };

    activity_log_service::record(
        &pool,
        &session.trip_id,
        Some(&session.traveler_id),
        "created",
        "poll",
        Some(&poll.id),
        Some(question),
    )
    .await;

    (StatusCode::CREATED, Json(poll)).into_response()
}

#[derive(Debug, Deserialize)]
pub struct VotePayload {
    pub option_id: Option<String>,
}

pub async fn vote_handler(
    Extension(session): Extension<TripSession>,
    Path(poll_id): Path<String>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<VotePayload>,
) -> Response {
    let Some(option_id) = required(&payload.option_id) else {
        return bad_request("option_id is required");
    };

    match poll_service::cast_vote(
        &pool,
        &session.trip_id,
        &poll_id,
        &session.traveler_id,
        option_id,
    )
    .await
    {
        Ok(()) => Json(json!({ "ok": true })).into_response(),
        Err(VoteError::PollNotFound) => not_found("poll not found"),
        Err(VoteError::OptionNotFound) => not_found("option not found"),
        Err(VoteError::PollClosed) => (
            StatusCode::CONFLICT,
            Json(json!({ "error": "poll is closed" })),
        )
            .into_response(),
        Err(VoteError::Db(e)) => {
            warn!("Vote failed for poll {}: {}", poll_id, e);
            internal_error()
        }
    }
}

pub async fn close_poll_handler(
    Extension(session): Extension<TripSession>,
    Path(poll_id): Path<String>,
    State(pool): State<SqlitePool>,
) -> Response {
    match polls_repo::close_poll(&pool, &poll_id, &session.trip_id).await {
        Ok(0) => not_found("poll not found"),
        Ok(_) => {
            activity_log_service::record(
                &pool,
                &session.trip_id,
                Some(&session.traveler_id),
                "closed",
                "poll",
                Some(&poll_id),
                None,
            )
            .await;
            Json(json!({ "ok": true })).into_response()
        }
        Err(e) => {
            warn!("Poll close failed for {}: {}", poll_id, e);
            internal_error()
        }
    }
}

pub async fn delete_poll_handler(
    Extension(session): Extension<TripSession>,
    Path(poll_id): Path<String>,
    State(pool): State<SqlitePool>,
) -> Response {
    match polls_repo::delete_poll(&pool, &poll_id, &session.trip_id).await {
        Ok(0) => not_found("poll not found"),
        Ok(_) => {
            activity_log_service::record(
                &pool,
                &session.trip_id,
                Some(&session.traveler_id),
                "deleted",
                "poll",
                Some(&poll_id),
                None,
            )
            .await;
            Json(json!({ "ok": true })).into_response()
        }
        Err(e) => {
            warn!("Poll delete failed for {}: {}", poll_id, e);
            internal_error()
        }
    }
}
