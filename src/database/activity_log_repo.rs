use sqlx::SqlitePool;

use crate::models::ActivityLogRow;

pub struct NewLogEntry<'a> {
    pub id: &'a str,
    pub trip_id: &'a str,
    pub traveler_id: Option<&'a str>,
    pub action: &'a str,
    pub entity_type: &'a str,
    pub entity_id: Option<&'a str>,
    pub detail: Option<&'a str>,
}

const SQL_INSERT_LOG_ENTRY: &str = r#"
INSERT INTO activity_log (id, trip_id, traveler_id, action, entity_type, entity_id, detail)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub async fn insert_log_entry(pool: &SqlitePool, entry: NewLogEntry<'_>) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_LOG_ENTRY)
        .bind(entry.id)
        .bind(entry.trip_id)
        .bind(entry.traveler_id)
        .bind(entry.action)
        .bind(entry.entity_type)
        .bind(entry.entity_id)
        .bind(entry.detail)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_LIST_LOG_ENTRIES: &str = r#"
SELECT id, trip_id, traveler_id, action, entity_type, entity_id, detail, created_at
FROM activity_log
WHERE trip_id = ?1
ORDER BY id DESC
LIMIT ?2
"#;

pub async fn list_log_entries(
    pool: &SqlitePool,
    trip_id: &str,
    limit: i64,
) -> sqlx::Result<Vec<ActivityLogRow>> {
    sqlx::query_as::<_, ActivityLogRow>(SQL_LIST_LOG_ENTRIES)
        .bind(trip_id)
        .bind(limit)
        .fetch_all(pool)
        .await
}
