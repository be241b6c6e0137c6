use sqlx::SqlitePool;

use crate::models::TripRow;

pub struct NewTrip<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub code: &'a str,
    pub start_date: Option<&'a str>,
    pub end_date: Option<&'a str>,
}

const SQL_INSERT_TRIP: &str = r#"
INSERT INTO trips (id, name, code, start_date, end_date)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub async fn insert_trip(pool: &SqlitePool, trip: NewTrip<'_>) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_TRIP)
        .bind(trip.id)
        .bind(trip.name)
        .bind(trip.code)
        .bind(trip.start_date)
        .bind(trip.end_date)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_GET_TRIP: &str = r#"
SELECT id, name, code, start_date, end_date, created_at
FROM trips
WHERE id = ?1
LIMIT 1
"#;

pub async fn get_trip(pool: &SqlitePool, trip_id: &str) -> sqlx::Result<Option<TripRow>> {
    sqlx::query_as::<_, TripRow>(SQL_GET_TRIP)
        .bind(trip_id)
        .fetch_optional(pool)
        .await
}

const SQL_FIND_TRIP_BY_CODE: &str = r#"
SELECT id, name, code, start_date, end_date, created_at
FROM trips
WHERE upper(code) = upper(?1)
LIMIT 1
"#;

pub async fn find_trip_by_code(pool: &SqlitePool, code: &str) -> sqlx::Result<Option<TripRow>> {
    sqlx::query_as::<_, TripRow>(SQL_FIND_TRIP_BY_CODE)
        .bind(code)
        .fetch_optional(pool)
        .await
}
