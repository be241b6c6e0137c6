use sqlx::SqlitePool;
use tracing::warn;
use uuid::Uuid;

use crate::database::activity_log_repo;
use crate::models::ActivityLogRow;

/// Best-effort log write: a failed insert is logged and swallowed so it can
/// never fail the request that triggered it.
pub async fn record(
    pool: &SqlitePool,
    trip_id: &str,
    traveler_id: Option<&str>,
    action: &str,
    entity_type: &str,
    entity_id: Option<&str>,
    detail: Option<&str>,
) {
    let id = Uuid::now_v7().to_string();
    let result = activity_log_repo::insert_log_entry(
        pool,
        activity_log_repo::NewLogEntry {
            id: &id,
            trip_id,
            traveler_id,
            action,
            entity_type,
            entity_id,
            detail,
        },
    )
    .await;
    if let Err(e) = result {
        warn!("activity log write failed ({} {}): {}", action, entity_type, e);
    }
}

pub async fn recent(
    pool: &SqlitePool,
    trip_id: &str,
    limit: i64,
) -> sqlx::Result<Vec<ActivityLogRow>> {
    activity_log_repo::list_log_entries(pool, trip_id, limit).await
}
