use sqlx::SqlitePool;

use crate::models::TravelerRow;

pub struct NewTraveler<'a> {
    pub id: &'a str,
    pub trip_id: &'a str,
    pub name: &'a str,
    pub color: Option<&'a str>,
}

const SQL_INSERT_TRAVELER: &str = r#"
INSERT INTO travelers (id, trip_id, name, color)
VALUES (?1, ?2, ?3, ?4)
"#;

pub async fn insert_traveler(pool: &SqlitePool, traveler: NewTraveler<'_>) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_TRAVELER)
        .bind(traveler.id)
        .bind(traveler.trip_id)
        .bind(traveler.name)
        .bind(traveler.color)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_LIST_TRAVELERS: &str = r#"
SELECT id, trip_id, name, color, created_at
FROM travelers
WHERE trip_id = ?1
ORDER BY id ASC
"#;

pub async fn list_travelers(pool: &SqlitePool, trip_id: &str) -> sqlx::Result<Vec<TravelerRow>> {
    sqlx::query_as::<_, TravelerRow>(SQL_LIST_TRAVELERS)
        .bind(trip_id)
        .fetch_all(pool)
        .await
}

const SQL_GET_TRAVELER_IN_TRIP: &str = r#"
SELECT id, trip_id, name, color, created_at
FROM travelers
WHERE id = ?1 AND trip_id = ?2
LIMIT 1
"#;

pub async fn get_traveler_in_trip(
    pool: &SqlitePool,
    traveler_id: &str,
    trip_id: &str,
) -> sqlx::Result<Option<TravelerRow>> {
    sqlx::query_as::<_, TravelerRow>(SQL_GET_TRAVELER_IN_TRIP)
        .bind(traveler_id)
        .bind(trip_id)
        .fetch_optional(pool)
        .await
}

const SQL_FIND_TRAVELER_BY_NAME: &str = r#"
SELECT id, trip_id, name, color, created_at
FROM travelers
WHERE trip_id = ?1 AND lower(name) = lower(?2)
LIMIT 1
"#;

pub async fn find_traveler_by_name(
    pool: &SqlitePool,
    trip_id: &str,
    name: &str,
) -> sqlx::Result<Option<TravelerRow>> {
    sqlx::query_as::<_, TravelerRow>(SQL_FIND_TRAVELER_BY_NAME)
        .bind(trip_id)
        .bind(name)
        .fetch_optional(pool)
        .await
}

const SQL_UPDATE_TRAVELER: &str = r#"
UPDATE travelers SET
  name = COALESCE(?3, name),
  color = COALESCE(?4, color)
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn update_traveler(
    pool: &SqlitePool,
    traveler_id: &str,
    trip_id: &str,
    name: Option<&str>,
    color: Option<&str>,
) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_UPDATE_TRAVELER)
        .bind(traveler_id)
        .bind(trip_id)
        .bind(name)
        .bind(color)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
