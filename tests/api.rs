use axum::body::Body;
use axum::Router;
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use roadtrip::build_router;
use roadtrip::database::schema;

// One connection so every request sees the same in-memory database.
async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    schema::apply_schema(&pool).await.expect("apply schema");
    build_router(pool)
}

fn request(method: &str, uri: &str, cookie: Option<&str>, body: Option<&Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn send_raw(app: &Router, req: Request<Body>) -> (StatusCode, String, String) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8_lossy(&bytes).to_string())
}

/// Creates a trip and joins it as `traveler_name`. Returns the session
/// cookie plus the join response body ({"trip": .., "traveler": ..}).
async fn join_new_trip(app: &Router, traveler_name: &str) -> (String, Value) {
    let (status, trip) = send(
        app,
        request("POST", "/api/trips", None, Some(&json!({ "name": "WC 2026" }))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let code = trip["code"].as_str().unwrap().to_string();
    join_trip(app, &code, traveler_name).await
}

async fn join_trip(app: &Router, code: &str, traveler_name: &str) -> (String, Value) {
    let req = request(
        "POST",
        "/api/trips/join",
        None,
        Some(&json!({ "code": code, "traveler_name": traveler_name })),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .expect("session cookie")
        .to_string();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (cookie, body)
}

#[tokio::test]
async fn health_endpoint_answers() {
    let app = test_app().await;
    let (status, body) = send(&app, request("GET", "/api/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn trip_create_requires_name() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        request("POST", "/api/trips", None, Some(&json!({ "name": "  " }))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name is required");
}

#[tokio::test]
async fn join_with_unknown_code_is_404() {
    let app = test_app().await;
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/trips/join",
            None,
            Some(&json!({ "code": "NOPE99", "traveler_name": "Sam" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn protected_routes_require_session() {
    let app = test_app().await;
    let (status, _) = send(&app, request("GET", "/api/stops", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(
        &app,
        request("GET", "/api/stops", Some("trip_session=garbage"), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn current_trip_returns_travelers_and_stops() {
    let app = test_app().await;
    let (cookie, joined) = join_new_trip(&app, "Sam").await;
    assert_eq!(joined["traveler"]["name"], "Sam");

    let (status, body) = send(&app, request("GET", "/api/trips/current", Some(&cookie), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["trip"]["name"], "WC 2026");
    assert_eq!(body["travelers"].as_array().unwrap().len(), 1);
    assert_eq!(body["stops"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn rejoining_by_name_reuses_the_traveler() {
    let app = test_app().await;
    let (cookie, joined) = join_new_trip(&app, "Sam").await;
    let code = joined["trip"]["code"].as_str().unwrap().to_string();

    let (_, rejoined) = join_trip(&app, &code, "sam").await;
    assert_eq!(rejoined["traveler"]["id"], joined["traveler"]["id"]);

    let (_, body) = send(&app, request("GET", "/api/travelers", Some(&cookie), None)).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn stop_crud_round_trip() {
    let app = test_app().await;
    let (cookie, _) = join_new_trip(&app, "Sam").await;

    let (status, stop) = send(
        &app,
        request(
            "POST",
            "/api/stops",
            Some(&cookie),
            Some(&json!({ "city": "Guadalajara", "country": "Mexico", "position": 1 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let stop_id = stop["id"].as_str().unwrap().to_string();
    assert_eq!(stop["city"], "Guadalajara");

    let (status, updated) = send(
        &app,
        request(
            "PUT",
            &format!("/api/stops/{}", stop_id),
            Some(&cookie),
            Some(&json!({ "notes": "two match days" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["notes"], "two match days");
    assert_eq!(updated["city"], "Guadalajara");

    let (_, listed) = send(&app, request("GET", "/api/stops", Some(&cookie), None)).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, _) = send(
        &app,
        request("DELETE", &format!("/api/stops/{}", stop_id), Some(&cookie), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = send(&app, request("GET", "/api/stops", Some(&cookie), None)).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn stop_create_requires_city() {
    let app = test_app().await;
    let (cookie, _) = join_new_trip(&app, "Sam").await;
    let (status, body) = send(
        &app,
        request("POST", "/api/stops", Some(&cookie), Some(&json!({ "country": "Mexico" }))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "city is required");
}

#[tokio::test]
async fn match_with_unknown_stop_is_404() {
    let app = test_app().await;
    let (cookie, _) = join_new_trip(&app, "Sam").await;
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/matches",
            Some(&cookie),
            Some(&json!({
                "home_team": "Netherlands",
                "away_team": "Argentina",
                "stop_id": "no-such-stop"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn accommodation_requires_an_existing_stop() {
    let app = test_app().await;
    let (cookie, _) = join_new_trip(&app, "Sam").await;

    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/accommodations",
            Some(&cookie),
            Some(&json!({ "name": "Hostal Centro", "stop_id": "missing" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, stop) = send(
        &app,
        request("POST", "/api/stops", Some(&cookie), Some(&json!({ "city": "Monterrey" }))),
    )
    .await;
    let (status, acc) = send(
        &app,
        request(
            "POST",
            "/api/accommodations",
            Some(&cookie),
            Some(&json!({
                "name": "Hostal Centro",
                "stop_id": stop["id"],
                "check_in": "2026-06-13",
                "check_out": "2026-06-15"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(acc["stop_id"], stop["id"]);
}

#[tokio::test]
async fn expense_even_split_covers_all_travelers() {
    let app = test_app().await;
    let (cookie, joined) = join_new_trip(&app, "Sam").await;
    let code = joined["trip"]["code"].as_str().unwrap().to_string();
    let (_, other) = join_trip(&app, &code, "Alex").await;

    let (status, created) = send(
        &app,
        request(
            "POST",
            "/api/expenses",
            Some(&cookie),
            Some(&json!({ "description": "Fuel", "amount_cents": 3001 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let splits = created["splits"].as_array().unwrap();
    assert_eq!(splits.len(), 2);
    let total: i64 = splits.iter().map(|s| s["share_cents"].as_i64().unwrap()).sum();
    assert_eq!(total, 3001);

    let (status, summary) = send(
        &app,
        request("GET", "/api/expenses/summary", Some(&cookie), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let groups = summary.as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["currency"], "EUR");

    let transfers = groups[0]["transfers"].as_array().unwrap();
    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0]["from"], other["traveler"]["id"]);
    assert_eq!(transfers[0]["to"], joined["traveler"]["id"]);
}

#[tokio::test]
async fn expense_splits_must_sum_to_amount() {
    let app = test_app().await;
    let (cookie, joined) = join_new_trip(&app, "Sam").await;
    let traveler_id = joined["traveler"]["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/expenses",
            Some(&cookie),
            Some(&json!({
                "description": "Tickets",
                "amount_cents": 5000,
                "splits": [{ "traveler_id": traveler_id, "share_cents": 4000 }]
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "splits must sum to amount_cents");
}

#[tokio::test]
async fn expense_split_with_unknown_traveler_is_404() {
    let app = test_app().await;
    let (cookie, _) = join_new_trip(&app, "Sam").await;
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/expenses",
            Some(&cookie),
            Some(&json!({
                "description": "Tickets",
                "amount_cents": 5000,
                "splits": [{ "traveler_id": "ghost", "share_cents": 5000 }]
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn checklist_toggle_flips_done() {
    let app = test_app().await;
    let (cookie, _) = join_new_trip(&app, "Sam").await;

    let (_, item) = send(
        &app,
        request(
            "POST",
            "/api/checklist",
            Some(&cookie),
            Some(&json!({ "label": "Sunscreen", "category": "packing" })),
        ),
    )
    .await;
    assert_eq!(item["done"], 0);
    let item_id = item["id"].as_str().unwrap().to_string();

    let (status, toggled) = send(
        &app,
        request(
            "POST",
            &format!("/api/checklist/{}/toggle", item_id),
            Some(&cookie),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["done"], 1);

    let (_, toggled) = send(
        &app,
        request(
            "POST",
            &format!("/api/checklist/{}/toggle", item_id),
            Some(&cookie),
            None,
        ),
    )
    .await;
    assert_eq!(toggled["done"], 0);
}

#[tokio::test]
async fn poll_vote_replacement_and_close() {
    let app = test_app().await;
    let (cookie, _) = join_new_trip(&app, "Sam").await;

    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/polls",
            Some(&cookie),
            Some(&json!({ "question": "Rest day plan?", "options": ["Beach"] })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, poll) = send(
        &app,
        request(
            "POST",
            "/api/polls",
            Some(&cookie),
            Some(&json!({ "question": "Rest day plan?", "options": ["Beach", "Ruins"] })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let poll_id = poll["id"].as_str().unwrap().to_string();

    let (_, polls) = send(&app, request("GET", "/api/polls", Some(&cookie), None)).await;
    let options = polls[0]["options"].as_array().unwrap().clone();
    assert_eq!(options.len(), 2);
    let beach = options[0]["id"].as_str().unwrap().to_string();
    let ruins = options[1]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        request(
            "POST",
            &format!("/api/polls/{}/vote", poll_id),
            Some(&cookie),
            Some(&json!({ "option_id": beach })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Single-choice poll: voting again moves the vote.
    let (status, _) = send(
        &app,
        request(
            "POST",
            &format!("/api/polls/{}/vote", poll_id),
            Some(&cookie),
            Some(&json!({ "option_id": ruins })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, polls) = send(&app, request("GET", "/api/polls", Some(&cookie), None)).await;
    let options = polls[0]["options"].as_array().unwrap();
    assert_eq!(options[0]["votes"], 0);
    assert_eq!(options[1]["votes"], 1);
    assert_eq!(polls[0]["my_votes"].as_array().unwrap().len(), 1);

    let (status, _) = send(
        &app,
        request(
            "POST",
            &format!("/api/polls/{}/close", poll_id),
            Some(&cookie),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        request(
            "POST",
            &format!("/api/polls/{}/vote", poll_id),
            Some(&cookie),
            Some(&json!({ "option_id": beach })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "poll is closed");
}

#[tokio::test]
async fn multi_choice_poll_accumulates_votes() {
    let app = test_app().await;
    let (cookie, _) = join_new_trip(&app, "Sam").await;

    let (status, poll) = send(
        &app,
        request(
            "POST",
            "/api/polls",
            Some(&cookie),
            Some(&json!({
                "question": "Which detours?",
                "options": ["Cenotes", "Teotihuacan"],
                "multi": true
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let poll_id = poll["id"].as_str().unwrap().to_string();

    let (_, polls) = send(&app, request("GET", "/api/polls", Some(&cookie), None)).await;
    let options = polls[0]["options"].as_array().unwrap().clone();
    let first = options[0]["id"].as_str().unwrap().to_string();
    let second = options[1]["id"].as_str().unwrap().to_string();

    // Third vote repeats the first option and must not double-count.
    for option_id in [&first, &second, &first] {
        let (status, _) = send(
            &app,
            request(
                "POST",
                &format!("/api/polls/{}/vote", poll_id),
                Some(&cookie),
                Some(&json!({ "option_id": option_id })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, polls) = send(&app, request("GET", "/api/polls", Some(&cookie), None)).await;
    let options = polls[0]["options"].as_array().unwrap();
    assert_eq!(options[0]["votes"], 1);
    assert_eq!(options[1]["votes"], 1);
    assert_eq!(polls[0]["my_votes"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn prediction_resubmit_replaces_scores() {
    let app = test_app().await;
    let (cookie, _) = join_new_trip(&app, "Sam").await;

    let (_, m) = send(
        &app,
        request(
            "POST",
            "/api/matches",
            Some(&cookie),
            Some(&json!({ "home_team": "Mexico", "away_team": "Canada" })),
        ),
    )
    .await;
    let match_id = m["id"].as_str().unwrap().to_string();

    for (home, away) in [(1, 0), (2, 2)] {
        let (status, _) = send(
            &app,
            request(
                "POST",
                "/api/predictions",
                Some(&cookie),
                Some(&json!({ "match_id": match_id, "home_score": home, "away_score": away })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, predictions) = send(&app, request("GET", "/api/predictions", Some(&cookie), None)).await;
    let predictions = predictions.as_array().unwrap();
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0]["home_score"], 2);
    assert_eq!(predictions[0]["away_score"], 2);
}

#[tokio::test]
async fn calendar_export_contains_events() {
    let app = test_app().await;
    let (cookie, _) = join_new_trip(&app, "Sam").await;

    let (_, stop) = send(
        &app,
        request("POST", "/api/stops", Some(&cookie), Some(&json!({ "city": "Mexico City" }))),
    )
    .await;
    send(
        &app,
        request(
            "POST",
            "/api/matches",
            Some(&cookie),
            Some(&json!({
                "home_team": "Netherlands",
                "away_team": "Argentina",
                "kickoff_at": "2026-06-14T18:00",
                "venue": "Estadio Azteca"
            })),
        ),
    )
    .await;
    send(
        &app,
        request(
            "POST",
            "/api/accommodations",
            Some(&cookie),
            Some(&json!({
                "name": "Hostal Centro",
                "stop_id": stop["id"],
                "check_in": "2026-06-13",
                "check_out": "2026-06-15"
            })),
        ),
    )
    .await;
    send(
        &app,
        request(
            "POST",
            "/api/itinerary",
            Some(&cookie),
            Some(&json!({ "title": "Drive north", "day": "2026-06-15", "start_time": "09:00" })),
        ),
    )
    .await;

    let (status, content_type, ics) = send_raw(
        &app,
        request("GET", "/api/export/calendar.ics", Some(&cookie), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/calendar"));
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
    assert!(ics.contains("DTSTART:20260614T180000"));
    assert!(ics.contains("SUMMARY:Netherlands vs Argentina"));
}

#[tokio::test]
async fn backup_export_dumps_every_table() {
    let app = test_app().await;
    let (cookie, _) = join_new_trip(&app, "Sam").await;

    let (status, dump) = send(
        &app,
        request("GET", "/api/export/backup", Some(&cookie), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dump["format_version"], 1);
    for key in [
        "trip",
        "travelers",
        "stops",
        "matches",
        "accommodations",
        "expenses",
        "expense_splits",
        "itinerary_items",
        "checklist_items",
        "notes",
        "photos",
        "polls",
        "poll_options",
        "poll_votes",
        "predictions",
        "activity_log",
    ] {
        assert!(dump.get(key).is_some(), "missing {} in backup", key);
    }
}

#[tokio::test]
async fn activity_log_records_mutations() {
    let app = test_app().await;
    let (cookie, _) = join_new_trip(&app, "Sam").await;

    let (_, stop) = send(
        &app,
        request("POST", "/api/stops", Some(&cookie), Some(&json!({ "city": "Houston" }))),
    )
    .await;
    send(
        &app,
        request(
            "DELETE",
            &format!("/api/stops/{}", stop["id"].as_str().unwrap()),
            Some(&cookie),
            None,
        ),
    )
    .await;

    let (status, log) = send(&app, request("GET", "/api/activity", Some(&cookie), None)).await;
    assert_eq!(status, StatusCode::OK);
    let entries = log.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    // Most recent first
    assert_eq!(entries[0]["action"], "deleted");
    assert_eq!(entries[1]["action"], "created");
    assert_eq!(entries[1]["detail"], "Houston");
}

#[tokio::test]
async fn checklist_changes_show_up_in_the_activity_log() {
    let app = test_app().await;
    let (cookie, _) = join_new_trip(&app, "Sam").await;

    let (_, item) = send(
        &app,
        request(
            "POST",
            "/api/checklist",
            Some(&cookie),
            Some(&json!({ "label": "Sunscreen" })),
        ),
    )
    .await;
    let item_id = item["id"].as_str().unwrap().to_string();

    send(
        &app,
        request(
            "PUT",
            &format!("/api/checklist/{}", item_id),
            Some(&cookie),
            Some(&json!({ "label": "Sunscreen SPF50" })),
        ),
    )
    .await;
    send(
        &app,
        request(
            "DELETE",
            &format!("/api/checklist/{}", item_id),
            Some(&cookie),
            None,
        ),
    )
    .await;

    let (status, log) = send(&app, request("GET", "/api/activity", Some(&cookie), None)).await;
    assert_eq!(status, StatusCode::OK);
    let actions: Vec<(&str, &str)> = log
        .as_array()
        .unwrap()
        .iter()
        .map(|e| {
            (
                e["entity_type"].as_str().unwrap(),
                e["action"].as_str().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        actions,
        vec![
            ("checklist_item", "deleted"),
            ("checklist_item", "updated"),
            ("checklist_item", "created"),
        ]
    );
}

#[tokio::test]
async fn trips_are_isolated_from_each_other() {
    let app = test_app().await;
    let (cookie_a, _) = join_new_trip(&app, "Sam").await;
    let (cookie_b, _) = join_new_trip(&app, "Alex").await;

    let (_, stop) = send(
        &app,
        request("POST", "/api/stops", Some(&cookie_a), Some(&json!({ "city": "Dallas" }))),
    )
    .await;

    let (_, listed) = send(&app, request("GET", "/api/stops", Some(&cookie_b), None)).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);

    let (status, _) = send(
        &app,
        request(
            "DELETE",
            &format!("/api/stops/{}", stop["id"].as_str().unwrap()),
            Some(&cookie_b),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn notes_require_title_and_pin_sorts_first() {
    let app = test_app().await;
    let (cookie, _) = join_new_trip(&app, "Sam").await;

    let (status, _) = send(
        &app,
        request("POST", "/api/notes", Some(&cookie), Some(&json!({ "body": "no title" }))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    send(
        &app,
        request(
            "POST",
            "/api/notes",
            Some(&cookie),
            Some(&json!({ "title": "Border crossing", "body": "bring passports" })),
        ),
    )
    .await;
    let (_, pinned) = send(
        &app,
        request(
            "POST",
            "/api/notes",
            Some(&cookie),
            Some(&json!({ "title": "Emergency numbers", "pinned": true })),
        ),
    )
    .await;

    let (_, listed) = send(&app, request("GET", "/api/notes", Some(&cookie), None)).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], pinned["id"]);
}

#[tokio::test]
async fn leave_clears_the_session_cookie() {
    let app = test_app().await;
    let (cookie, _) = join_new_trip(&app, "Sam").await;

    let response = app
        .clone()
        .oneshot(request("POST", "/api/trips/leave", Some(&cookie), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(set_cookie.starts_with("trip_session="));
    assert!(set_cookie
        .split(';')
        .next()
        .unwrap()
        .trim_end()
        .ends_with("trip_session="));
}
