use sqlx::SqlitePool;

use crate::models::ChecklistItemRow;

pub struct NewChecklistItem<'a> {
    pub id: &'a str,
    pub trip_id: &'a str,
    pub traveler_id: Option<&'a str>,
    pub label: &'a str,
    pub category: Option<&'a str>,
}

const SQL_INSERT_CHECKLIST_ITEM: &str = r#"
INSERT INTO checklist_items (id, trip_id, traveler_id, label, category)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub async fn insert_checklist_item(
    pool: &SqlitePool,
    item: NewChecklistItem<'_>,
) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_CHECKLIST_ITEM)
        .bind(item.id)
        .bind(item.trip_id)
        .bind(item.traveler_id)
        .bind(item.label)
        .bind(item.category)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_LIST_CHECKLIST_ITEMS: &str = r#"
SELECT id, trip_id, traveler_id, label, category, done, created_at
FROM checklist_items
WHERE trip_id = ?1
ORDER BY category ASC, id ASC
"#;

pub async fn list_checklist_items(
    pool: &SqlitePool,
    trip_id: &str,
) -> sqlx::Result<Vec<ChecklistItemRow>> {
    sqlx::query_as::<_, ChecklistItemRow>(SQL_LIST_CHECKLIST_ITEMS)
        .bind(trip_id)
        .fetch_all(pool)
        .await
}

const SQL_GET_CHECKLIST_ITEM_IN_TRIP: &str = r#"
SELECT id, trip_id, traveler_id, label, category, done, created_at
FROM checklist_items
WHERE id = ?1 AND trip_id = ?2
LIMIT 1
"#;

pub async fn get_checklist_item_in_trip(
    pool: &SqlitePool,
    item_id: &str,
    trip_id: &str,
) -> sqlx::Result<Option<ChecklistItemRow>> {
    sqlx::query_as::<_, ChecklistItemRow>(SQL_GET_CHECKLIST_ITEM_IN_TRIP)
        .bind(item_id)
        .bind(trip_id)
        .fetch_optional(pool)
        .await
}

pub struct UpdateChecklistItem<'a> {
    pub label: Option<&'a str>,
    pub category: Option<&'a str>,
    pub traveler_id: Option<&'a str>,
}

const SQL_UPDATE_CHECKLIST_ITEM: &str = r#"
UPDATE checklist_items SET
  label = COALESCE(?3, label),
  category = COALESCE(?4, category),
  traveler_id = COALESCE(?5, traveler_id)
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn update_checklist_item(
    pool: &SqlitePool,
    item_id: &str,
    trip_id: &str,
    update: UpdateChecklistItem<'_>,
) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_UPDATE_CHECKLIST_ITEM)
        .bind(item_id)
        .bind(trip_id)
        .bind(update.label)
        .bind(update.category)
        .bind(update.traveler_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

const SQL_TOGGLE_CHECKLIST_ITEM: &str = r#"
UPDATE checklist_items SET
  done = CASE done WHEN 0 THEN 1 ELSE 0 END
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn toggle_checklist_item(
    pool: &SqlitePool,
    item_id: &str,
    trip_id: &str,
) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_TOGGLE_CHECKLIST_ITEM)
        .bind(item_id)
        .bind(trip_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

const SQL_DELETE_CHECKLIST_ITEM: &str = r#"
DELETE FROM checklist_items
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn delete_checklist_item(
    pool: &SqlitePool,
    item_id: &str,
    trip_id: &str,
) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_DELETE_CHECKLIST_ITEM)
        .bind(item_id)
        .bind(trip_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
