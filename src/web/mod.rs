pub mod middleware;
pub mod routes;

use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use serde_json::json;
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::web::middleware::auth;
use crate::web::routes::{
    accommodations, activity, checklist, expenses, export, itinerary, matches, notes, photos,
    polls, predictions, stops, travelers, trips,
};

pub fn build_router(pool: SqlitePool) -> Router {
    // Everything below requires the trip_session cookie; the middleware
    // injects a TripSession extension that scopes every query to one trip.
    let protected = Router::new()
        .route("/api/trips/current", get(trips::current_trip_handler))
        .route("/api/trips/leave", post(trips::leave_trip_handler))
        .route("/api/travelers", get(travelers::list_travelers_handler))
        .route(
            "/api/travelers/:traveler_id",
            put(travelers::update_traveler_handler),
        )
        .route(
            "/api/stops",
            get(stops::list_stops_handler).post(stops::create_stop_handler),
        )
        .route(
            "/api/stops/:stop_id",
            put(stops::update_stop_handler).delete(stops::delete_stop_handler),
        )
        .route(
            "/api/matches",
            get(matches::list_matches_handler).post(matches::create_match_handler),
        )
        .route(
            "/api/matches/:match_id",
            put(matches::update_match_handler).delete(matches::delete_match_handler),
        )
        .route(
            "/api/accommodations",
            get(accommodations::list_accommodations_handler)
                .post(accommodations::create_accommodation_handler),
        )
        .route(
            "/api/accommodations/:accommodation_id",
            put(accommodations::update_accommodation_handler)
                .delete(accommodations::delete_accommodation_handler),
        )
        .route(
            "/api/expenses",
            get(expenses::list_expenses_handler).post(expenses::create_expense_handler),
        )
        .route(
            "/api/expenses/summary",
            get(expenses::expense_summary_handler),
        )
        .route(
            "/api/expenses/:expense_id",
            put(expenses::update_expense_handler).delete(expenses::delete_expense_handler),
        )
        .route(
            "/api/itinerary",
            get(itinerary::list_itinerary_handler).post(itinerary::create_itinerary_handler),
        )
        .route(
            "/api/itinerary/:item_id",
            put(itinerary::update_itinerary_handler).delete(itinerary::delete_itinerary_handler),
        )
        .route(
            "/api/checklist",
            get(checklist::list_checklist_handler).post(checklist::create_checklist_handler),
        )
        .route(
            "/api/checklist/:item_id",
            put(checklist::update_checklist_handler).delete(checklist::delete_checklist_handler),
        )
        .route(
            "/api/checklist/:item_id/toggle",
            post(checklist::toggle_checklist_handler),
        )
        .route(
            "/api/notes",
            get(notes::list_notes_handler).post(notes::create_note_handler),
        )
        .route(
            "/api/notes/:note_id",
            put(notes::update_note_handler).delete(notes::delete_note_handler),
        )
        .route(
            "/api/photos",
            get(photos::list_photos_handler).post(photos::create_photo_handler),
        )
        .route(
            "/api/photos/:photo_id",
            put(photos::update_photo_handler).delete(photos::delete_photo_handler),
        )
        .route(
            "/api/polls",
            get(polls::list_polls_handler).post(polls::create_poll_handler),
        )
        .route("/api/polls/:poll_id", delete(polls::delete_poll_handler))
        .route("/api/polls/:poll_id/vote", post(polls::vote_handler))
        .route("/api/polls/:poll_id/close", post(polls::close_poll_handler))
        .route(
            "/api/predictions",
            get(predictions::list_predictions_handler)
                .post(predictions::submit_prediction_handler),
        )
        .route(
            "/api/predictions/:prediction_id",
            delete(predictions::delete_prediction_handler),
        )
        .route("/api/activity", get(activity::activity_handler))
        .route("/api/export/backup", get(export::backup_handler))
        .route("/api/export/calendar.ics", get(export::calendar_handler))
        .layer(axum::middleware::from_fn_with_state(
            pool.clone(),
            auth::require_session,
        ));

    Router::new()
        // Public routes
        .route(
            "/api/health",
            get(|| async { Json(json!({ "status": "ok" })) }),
        )
        .route("/api/trips", post(trips::create_trip_handler))
        .route("/api/trips/join", post(trips::join_trip_handler))
        // Protected routes
        .merge(protected)
        // Polling clients must never see cached responses
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .with_state(pool)
}
