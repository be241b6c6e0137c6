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

use crate::database::{matches_repo, stops_repo};
use crate::services::activity_log_service;
use crate::web::middleware::auth::TripSession;
use crate::web::routes::{bad_request, internal_error, not_found, optional, required};

pub async fn list_matches_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
) -> Response {
    match matches_repo::list_matches(&pool, &session.trip_id).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            warn!("Match list failed: {}", e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateMatchPayload {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub stop_id: Option<String>,
    pub venue: Option<String>,
    pub kickoff_at: Option<String>,
    pub stage: Option<String>,
    pub ticket_status: Option<String>,
}

pub async fn create_match_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateMatchPayload>,
) -> Response {
    let Some(home_team) = required(&payload.home_team) else {
        return bad_request("home_team is required");
    };
    let Some(away_team) = required(&payload.away_team) else {
        return bad_request("away_team is required");
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
    let result = matches_repo::insert_match(
        &pool,
        matches_repo::NewMatch {
            id: &id,
            trip_id: &session.trip_id,
            stop_id: optional(&payload.stop_id),
            home_team,
            away_team,
            venue: optional(&payload.venue),
            kickoff_at: optional(&payload.kickoff_at),
            stage: optional(&payload.stage),
            ticket_status: optional(&payload.ticket_status),
        },
    )
    .await;
    if let Err(e) = result {
        warn!("Match create failed: {}", e);
        return internal_error();
    }

    let detail = format!("{} vs {}", home_team, away_team);
    activity_log_service::record(
        &pool,
        &session.trip_id,
        Some(&session.traveler_id),
        "created",
        "match",
        Some(&id),
        Some(&detail),
    )
    .await;

    match matches_repo::get_match_in_trip(&pool, &id, &session.trip_id).await {
        Ok(Some(row)) => (StatusCode::CREATED, Json(row)).into_response(),
        Ok(None) => internal_error(),
        Err(e) => {
            warn!("Match reload failed for {}: {}", id, e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateMatchPayload {
    pub stop_id: Option<String>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub venue: Option<String>,
    pub kickoff_at: Option<String>,
    pub stage: Option<String>,
    pub ticket_status: Option<String>,
}

pub async fn update_match_handler(
    Extension(session): Extension<TripSession>,
    Path(match_id): Path<String>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<UpdateMatchPayload>,
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

    let affected = match matches_repo::update_match(
        &pool,
        &match_id,
        &session.trip_id,
        matches_repo::UpdateMatch {
            stop_id: optional(&payload.stop_id),
            home_team: optional(&payload.home_team),
            away_team: optional(&payload.away_team),
            venue: optional(&payload.venue),
            kickoff_at: optional(&payload.kickoff_at),
            stage: optional(&payload.stage),
            ticket_status: optional(&payload.ticket_status),
        },
    )
    .await
    {
        Ok(n) => n,
        Err(e) => {
            warn!("Match update failed for {}: {}", match_id, e);
            return internal_error();
        }
    };
    if affected == 0 {
        return not_found("match not found");
    }

    activity_log_service::record(
        &pool,
        &session.trip_id,
        Some(&session.traveler_id),
        "updated",
        "match",
        Some(&match_id),
        None,
    )
    .await;

    match matches_repo::get_match_in_trip(&pool, &match_id, &session.trip_id).await {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => not_found("match not found"),
        Err(e) => {
            warn!("Match reload failed for {}: {}", match_id, e);
            internal_error()
        }
    }
}

pub async fn delete_match_handler(
    Extension(session): Extension<TripSession>,
    Path(match_id): Path<String>,
    State(pool): State<SqlitePool>,
) -> Response {
    match matches_repo::delete_match(&pool, &match_id, &session.trip_id).await {
        Ok(0) => not_found("match not found"),
        Ok(_) => {
            activity_log_service::record(
                &pool,
                &session.trip_id,
                Some(&session.traveler_id),
                "deleted",
                "match",
                Some(&match_id),
                None,
            )
            .await;
            Json(json!({ "ok": true })).into_response()
        }
        Err(e) => {
            warn!("Match delete failed for {}: {}", match_id, e);
            internal_error()
        }
    }
}
