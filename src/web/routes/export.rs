use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Extension, Json,
};
use sqlx::SqlitePool;
use tracing::warn;

use crate::database::{accommodations_repo, itinerary_repo, matches_repo, trips_repo};
use crate::services::{backup_service, calendar_service};
use crate::web::middleware::auth::TripSession;
use crate::web::routes::{internal_error, not_found};

pub async fn backup_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
) -> Response {
    match backup_service::dump_trip(&pool, &session.trip_id).await {
        Ok(Some(dump)) => Json(dump).into_response(),
        Ok(None) => not_found("trip not found"),
        Err(e) => {
            warn!("Backup export failed: {}", e);
            internal_error()
        }
    }
}

pub async fn calendar_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
) -> Response {
    let trip = match trips_repo::get_trip(&pool, &session.trip_id).await {
        Ok(Some(trip)) => trip,
        Ok(None) => return not_found("trip not found"),
        Err(e) => {
            warn!("Trip load failed for calendar: {}", e);
            return internal_error();
        }
    };

    let matches = match matches_repo::list_matches(&pool, &session.trip_id).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!("Match list failed for calendar: {}", e);
            return internal_error();
        }
    };
    let accommodations =
        match accommodations_repo::list_accommodations(&pool, &session.trip_id).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!("Accommodation list failed for calendar: {}", e);
                return internal_error();
            }
        };
    let itinerary = match itinerary_repo::list_itinerary_items(&pool, &session.trip_id).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!("Itinerary list failed for calendar: {}", e);
            return internal_error();
        }
    };

    let ics = calendar_service::build_ics(&trip, &matches, &accommodations, &itinerary);
    (
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"trip.ics\"",
            ),
        ],
        ics,
    )
        .into_response()
}
