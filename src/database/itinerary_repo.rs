use sqlx::SqlitePool;

use crate::models::ItineraryItemRow;

pub struct NewItineraryItem<'a> {
    pub id: &'a str,
    pub trip_id: &'a str,
    pub stop_id: Option<&'a str>,
    pub title: &'a str,
    pub day: &'a str,
    pub start_time: Option<&'a str>,
    pub end_time: Option<&'a str>,
    pub kind: Option<&'a str>,
    pub notes: Option<&'a str>,
}

const SQL_INSERT_ITINERARY_ITEM: &str = r#"
INSERT INTO itinerary_items (id, trip_id, stop_id, title, day, start_time, end_time, kind, notes)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
"#;

pub async fn insert_itinerary_item(
    pool: &SqlitePool,
    item: NewItineraryItem<'_>,
) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_ITINERARY_ITEM)
        .bind(item.id)
        .bind(item.trip_id)
        .bind(item.stop_id)
        .bind(item.title)
        .bind(item.day)
        .bind(item.start_time)
        .bind(item.end_time)
        .bind(item.kind)
        .bind(item.notes)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_LIST_ITINERARY_ITEMS: &str = r#"
SELECT id, trip_id, stop_id, title, day, start_time, end_time, kind, notes, created_at
FROM itinerary_items
WHERE trip_id = ?1
ORDER BY day ASC, start_time ASC, id ASC
"#;

pub async fn list_itinerary_items(
    pool: &SqlitePool,
    trip_id: &str,
) -> sqlx::Result<Vec<ItineraryItemRow>> {
    sqlx::query_as::<_, ItineraryItemRow>(SQL_LIST_ITINERARY_ITEMS)
        .bind(trip_id)
        .fetch_all(pool)
        .await
}

const SQL_GET_ITINERARY_ITEM_IN_TRIP: &str = r#"
SELECT id, trip_id, stop_id, title, day, start_time, end_time, kind, notes, created_at
FROM itinerary_items
WHERE id = ?1 AND trip_id = ?2
LIMIT 1
"#;

pub async fn get_itinerary_item_in_trip(
    pool: &SqlitePool,
    item_id: &str,
    trip_id: &str,
) -> sqlx::Result<Option<ItineraryItemRow>> {
    sqlx::query_as::<_, ItineraryItemRow>(SQL_GET_ITINERARY_ITEM_IN_TRIP)
        .bind(item_id)
        .bind(trip_id)
        .fetch_optional(pool)
        .await
}

pub struct UpdateItineraryItem<'a> {
    pub stop_id: Option<&'a str>,
    pub title: Option<&'a str>,
    pub day: Option<&'a str>,
    pub start_time: Option<&'a str>,
    pub end_time: Option<&'a str>,
    pub kind: Option<&'a str>,
    pub notes: Option<&'a str>,
}

const SQL_UPDATE_ITINERARY_ITEM: &str = r#"
UPDATE itinerary_items SET
  stop_id = COALESCE(?3, stop_id),
  title = COALESCE(?4, title),
  day = COALESCE(?5, day),
  start_time = COALESCE(?6, start_time),
  end_time = COALESCE(?7, end_time),
  kind = COALESCE(?8, kind),
  notes = COALESCE(?9, notes)
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn update_itinerary_item(
    pool: &SqlitePool,
    item_id: &str,
    trip_id: &str,
    update: UpdateItineraryItem<'_>,
) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_UPDATE_ITINERARY_ITEM)
        .bind(item_id)
        .bind(trip_id)
        .bind(update.stop_id)
        .bind(update.title)
        .bind(update.day)
        .bind(update.start_time)
        .bind(update.end_time)
        .bind(update.kind)
        .bind(update.notes)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

const SQL_DELETE_ITINERARY_ITEM: &str = r#"
DELETE FROM itinerary_items
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn delete_itinerary_item(
    pool: &SqlitePool,
    item_id: &str,
    trip_id: &str,
) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_DELETE_ITINERARY_ITEM)
        .bind(item_id)
        .bind(trip_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
