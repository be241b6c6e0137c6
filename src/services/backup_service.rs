use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::database::{
    accommodations_repo, activity_log_repo, checklist_repo, expenses_repo, itinerary_repo,
    matches_repo, notes_repo, photos_repo, polls_repo, predictions_repo, stops_repo,
    travelers_repo, trips_repo,
};

pub const BACKUP_FORMAT_VERSION: i64 = 1;

/// Full JSON dump of one trip, keyed by table name. Everything the schema
/// holds for the trip goes in, so a restore tool can replay it table by
/// table.
pub async fn dump_trip(pool: &SqlitePool, trip_id: &str) -> sqlx::Result<Option<Value>> {
    let Some(trip) = trips_repo::get_trip(pool, trip_id).await? else {
        return Ok(None);
    };

    Ok(Some(json!({
        "format_version": BACKUP_FORMAT_VERSION,
        "trip": trip,
        "travelers": travelers_repo::list_travelers(pool, trip_id).await?,
        "stops": stops_repo::list_stops(pool, trip_id).await?,
        "matches": matches_repo::list_matches(pool, trip_id).await?,
        "accommodations": accommodations_repo::list_accommodations(pool, trip_id).await?,
        "expenses": expenses_repo::list_expenses(pool, trip_id).await?,
        "expense_splits": expenses_repo::list_splits_for_trip(pool, trip_id).await?,
        "itinerary_items": itinerary_repo::list_itinerary_items(pool, trip_id).await?,
        "checklist_items": checklist_repo::list_checklist_items(pool, trip_id).await?,
        "notes": notes_repo::list_notes(pool, trip_id).await?,
        "photos": photos_repo::list_photos(pool, trip_id).await?,
        "polls": polls_repo::list_polls(pool, trip_id).await?,
        "poll_options": polls_repo::list_options_for_trip(pool, trip_id).await?,
        "poll_votes": polls_repo::list_votes_for_trip(pool, trip_id).await?,
        "predictions": predictions_repo::list_predictions(pool, trip_id).await?,
        "activity_log": activity_log_repo::list_log_entries(pool, trip_id, 10_000).await?,
    })))
}
