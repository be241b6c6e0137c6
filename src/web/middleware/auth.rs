use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::database::travelers_repo;

pub const SESSION_COOKIE: &str = "trip_session";

/// Trip scope for every protected handler: which trip the request operates
/// on and which traveler is acting.
#[derive(Clone, Debug)]
pub struct TripSession {
    pub trip_id: String,
    pub traveler_id: String,
}

#[derive(Serialize, Deserialize)]
struct SessionPayload {
    trip_id: String,
    traveler_id: String,
}

pub fn encode_session(trip_id: &str, traveler_id: &str) -> String {
    let payload = SessionPayload {
        trip_id: trip_id.to_string(),
        traveler_id: traveler_id.to_string(),
    };
    let bytes = serde_json::to_vec(&payload).unwrap_or_default();
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

pub fn decode_session(token: &str) -> Option<TripSession> {
    let bytes = general_purpose::URL_SAFE_NO_PAD.decode(token).ok()?;
    let payload: SessionPayload = serde_json::from_slice(&bytes).ok()?;
    if payload.trip_id.is_empty() || payload.traveler_id.is_empty() {
        return None;
    }
    Some(TripSession {
        trip_id: payload.trip_id,
        traveler_id: payload.traveler_id,
    })
}

pub async fn require_session(
    State(pool): State<SqlitePool>,
    mut request: Request,
    next: Next,
) -> Response {
    // Extract the session cookie from the request
    let token = request
        .headers()
        .get(header::COOKIE)
        .and_then(|hv| hv.to_str().ok())
        .and_then(|cookies| {
            cookies
                .split("; ")
                .find(|c| c.starts_with("trip_session="))
                .and_then(|c| c.strip_prefix("trip_session="))
        });

    if let Some(token) = token {
        if let Some(session) = decode_session(token) {
            // The traveler row must still exist in that trip; stale cookies
            // from a wiped database fall through to 401.
            if let Ok(Some(_)) =
                travelers_repo::get_traveler_in_trip(&pool, &session.traveler_id, &session.trip_id)
                    .await
            {
                request.extensions_mut().insert(session);
                return next.run(request).await;
            }
        }
    }

    // No valid session cookie, return 401
    Response::builder()
        .status(401)
        .body(axum::body::Body::from("Unauthorized - join a trip first"))
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_token_round_trips() {
        let token = encode_session("trip-1", "traveler-9");
        let session = decode_session(&token).expect("decode");
        assert_eq!(session.trip_id, "trip-1");
        assert_eq!(session.traveler_id, "traveler-9");
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        assert!(decode_session("not-base64!!!").is_none());
        assert!(decode_session("").is_none());
        let empty = encode_session("", "");
        assert!(decode_session(&empty).is_none());
    }
}
