use sqlx::SqlitePool;

use crate::models::StopRow;

pub struct NewStop<'a> {
    pub id: &'a str,
    pub trip_id: &'a str,
    pub city: &'a str,
    pub country: Option<&'a str>,
    pub arrival_date: Option<&'a str>,
    pub departure_date: Option<&'a str>,
    pub position: i64,
    pub notes: Option<&'a str>,
}

const SQL_INSERT_STOP: &str = r#"
INSERT INTO stops (id, trip_id, city, country, arrival_date, departure_date, position, notes)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

pub async fn insert_stop(pool: &SqlitePool, stop: NewStop<'_>) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_STOP)
        .bind(stop.id)
        .bind(stop.trip_id)
        .bind(stop.city)
        .bind(stop.country)
        .bind(stop.arrival_date)
        .bind(stop.departure_date)
        .bind(stop.position)
        .bind(stop.notes)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_LIST_STOPS: &str = r#"
SELECT id, trip_id, city, country, arrival_date, departure_date, position, notes, created_at
FROM stops
WHERE trip_id = ?1
ORDER BY position ASC, id ASC
"#;

pub async fn list_stops(pool: &SqlitePool, trip_id: &str) -> sqlx::Result<Vec<StopRow>> {
    sqlx::query_as::<_, StopRow>(SQL_LIST_STOPS)
        .bind(trip_id)
        .fetch_all(pool)
        .await
}

const SQL_GET_STOP_IN_TRIP: &str = r#"
SELECT id, trip_id, city, country, arrival_date, departure_date, position, notes, created_at
FROM stops
WHERE id = ?1 AND trip_id = ?2
LIMIT 1
"#;

pub async fn get_stop_in_trip(
    pool: &SqlitePool,
    stop_id: &str,
    trip_id: &str,
) -> sqlx::Result<Option<StopRow>> {
    sqlx::query_as::<_, StopRow>(SQL_GET_STOP_IN_TRIP)
        .bind(stop_id)
        .bind(trip_id)
        .fetch_optional(pool)
        .await
}

pub struct UpdateStop<'a> {
    pub city: Option<&'a str>,
    pub country: Option<&'a str>,
    pub arrival_date: Option<&'a str>,
    pub departure_date: Option<&'a str>,
    pub position: Option<i64>,
    pub notes: Option<&'a str>,
}

// Field allow-list: absent fields keep their current value.
const SQL_UPDATE_STOP: &str = r#"
UPDATE stops SET
  city = COALESCE(?3, city),
  country = COALESCE(?4, country),
  arrival_date = COALESCE(?5, arrival_date),
  departure_date = COALESCE(?6, departure_date),
  position = COALESCE(?7, position),
  notes = COALESCE(?8, notes)
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn update_stop(
    pool: &SqlitePool,
    stop_id: &str,
    trip_id: &str,
    update: UpdateStop<'_>,
) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_UPDATE_STOP)
        .bind(stop_id)
        .bind(trip_id)
        .bind(update.city)
        .bind(update.country)
        .bind(update.arrival_date)
        .bind(update.departure_date)
        .bind(update.position)
        .bind(update.notes)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

const SQL_DELETE_STOP: &str = r#"
DELETE FROM stops
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn delete_stop(pool: &SqlitePool, stop_id: &str, trip_id: &str) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_DELETE_STOP)
        .bind(stop_id)
        .bind(trip_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
