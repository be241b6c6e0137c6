use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::warn;
use uuid::Uuid;

use crate::database::{matches_repo, predictions_repo};
use crate::web::middleware::auth::TripSession;
use crate::web::routes::{bad_request, internal_error, not_found, required};

pub async fn list_predictions_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
) -> Response {
    match predictions_repo::list_predictions(&pool, &session.trip_id).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            warn!("Prediction list failed: {}", e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitPredictionPayload {
    pub match_id: Option<String>,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
}

/// Upsert: one prediction per traveler per match, re-submitting replaces it.
pub async fn submit_prediction_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<SubmitPredictionPayload>,
) -> Response {
    let Some(match_id) = required(&payload.match_id) else {
        return bad_request("match_id is required");
    };
    let Some(home_score) = payload.home_score.filter(|s| *s >= 0) else {
        return bad_request("home_score is required");
    };
    let Some(away_score) = payload.away_score.filter(|s| *s >= 0) else {
        return bad_request("away_score is required");
    };

    match matches_repo::get_match_in_trip(&pool, match_id, &session.trip_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return not_found("match not found"),
        Err(e) => {
            warn!("Match lookup failed for {}: {}", match_id, e);
            return internal_error();
        }
    }

    let id = Uuid::now_v7().to_string();
    let result = predictions_repo::upsert_prediction(
        &pool,
        predictions_repo::NewPrediction {
            id: &id,
            trip_id: &session.trip_id,
            traveler_id: &session.traveler_id,
            match_id,
            home_score,
            away_score,
        },
    )
    .await;
    if let Err(e) = result {
        warn!("Prediction upsert failed: {}", e);
        return internal_error();
    }

    Json(json!({ "ok": true })).into_response()
}

pub async fn delete_prediction_handler(
    Extension(session): Extension<TripSession>,
    Path(prediction_id): Path<String>,
    State(pool): State<SqlitePool>,
) -> Response {
    match predictions_repo::delete_prediction(&pool, &prediction_id, &session.trip_id).await {
        Ok(0) => not_found("prediction not found"),
        Ok(_) => Json(json!({ "ok": true })).into_response(),
        Err(e) => {
            warn!("Prediction delete failed for {}: {}", prediction_id, e);
            internal_error()
        }
    }
}
