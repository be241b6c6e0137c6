use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use cookie::Cookie;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::trip_service;
use crate::web::middleware::auth::{self, TripSession};
use crate::web::routes::{bad_request, internal_error, not_found, optional, required};

#[derive(Debug, Deserialize)]
pub struct CreateTripPayload {
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

pub async fn create_trip_handler(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateTripPayload>,
) -> Response {
    let Some(name) = required(&payload.name) else {
        return bad_request("name is required");
    };

    match trip_service::create_trip(
        &pool,
        name,
        optional(&payload.start_date),
        optional(&payload.end_date),
    )
    .await
    {
        Ok(trip) => (StatusCode::CREATED, Json(trip)).into_response(),
        Err(e) => {
            warn!("Trip create failed: {}", e);
            internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct JoinTripPayload {
    pub code: Option<String>,
    pub traveler_name: Option<String>,
}

pub async fn join_trip_handler(
    State(pool): State<SqlitePool>,
    Json(payload): Json<JoinTripPayload>,
) -> Response {
    let Some(code) = required(&payload.code) else {
        return bad_request("code is required");
    };
    let Some(traveler_name) = required(&payload.traveler_name) else {
        return bad_request("traveler_name is required");
    };

    let joined = match trip_service::join_trip(&pool, code, traveler_name).await {
        Ok(v) => v,
        Err(e) => {
            warn!("Trip join failed for code {}: {}", code, e);
            return internal_error();
        }
    };
    let Some((trip, traveler)) = joined else {
        return not_found("unknown trip code");
    };

    let mut session_cookie = Cookie::new(
        auth::SESSION_COOKIE,
        auth::encode_session(&trip.id, &traveler.id),
    );
    session_cookie.set_path("/");
    session_cookie.set_http_only(true);
    session_cookie.set_same_site(cookie::SameSite::Lax);

    let mut response = Json(json!({ "trip": trip, "traveler": traveler })).into_response();
    response.headers_mut().append(
        header::SET_COOKIE,
        session_cookie.to_string().parse().unwrap(),
    );
    response
}

pub async fn current_trip_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
) -> Response {
    match trip_service::trip_overview(&pool, &session.trip_id).await {
        Ok(Some(overview)) => Json(overview).into_response(),
        Ok(None) => not_found("trip not found"),
        Err(e) => {
            warn!("Trip overview failed for {}: {}", session.trip_id, e);
            internal_error()
        }
    }
}

pub async fn leave_trip_handler() -> Response {
    // Clear the session cookie
    let mut session_cookie = Cookie::new(auth::SESSION_COOKIE, "");
    session_cookie.set_path("/");
    session_cookie.set_http_only(true);
    session_cookie.set_same_site(cookie::SameSite::Lax);
    session_cookie.set_max_age(None);

    let mut response = Json(json!({ "ok": true })).into_response();
    response.headers_mut().append(
        header::SET_COOKIE,
        session_cookie.to_string().parse().unwrap(),
    );
    response
}
