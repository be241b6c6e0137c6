use sqlx::SqlitePool;

use crate::models::AccommodationRow;

pub struct NewAccommodation<'a> {
    pub id: &'a str,
    pub trip_id: &'a str,
    pub stop_id: &'a str,
    pub name: &'a str,
    pub address: Option<&'a str>,
    pub check_in: Option<&'a str>,
    pub check_out: Option<&'a str>,
    pub booking_ref: Option<&'a str>,
    pub price_cents: Option<i64>,
    pub url: Option<&'a str>,
}

const SQL_INSERT_ACCOMMODATION: &str = r#"
INSERT INTO accommodations (id, trip_id, stop_id, name, address, check_in, check_out, booking_ref, price_cents, url)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
"#;

pub async fn insert_accommodation(
    pool: &SqlitePool,
    acc: NewAccommodation<'_>,
) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_ACCOMMODATION)
        .bind(acc.id)
        .bind(acc.trip_id)
        .bind(acc.stop_id)
        .bind(acc.name)
        .bind(acc.address)
        .bind(acc.check_in)
        .bind(acc.check_out)
        .bind(acc.booking_ref)
        .bind(acc.price_cents)
        .bind(acc.url)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_LIST_ACCOMMODATIONS: &str = r#"
SELECT id, trip_id, stop_id, name, address, check_in, check_out, booking_ref, price_cents, url, created_at
FROM accommodations
WHERE trip_id = ?1
ORDER BY check_in ASC, id ASC
"#;

pub async fn list_accommodations(
    pool: &SqlitePool,
    trip_id: &str,
) -> sqlx::Result<Vec<AccommodationRow>> {
    sqlx::query_as::<_, AccommodationRow>(SQL_LIST_ACCOMMODATIONS)
        .bind(trip_id)
        .fetch_all(pool)
        .await
}

const SQL_GET_ACCOMMODATION_IN_TRIP: &str = r#"
SELECT id, trip_id, stop_id, name, address, check_in, check_out, booking_ref, price_cents, url, created_at
FROM accommodations
WHERE id = ?1 AND trip_id = ?2
LIMIT 1
"#;

pub async fn get_accommodation_in_trip(
    pool: &SqlitePool,
    accommodation_id: &str,
    trip_id: &str,
) -> sqlx::Result<Option<AccommodationRow>> {
    sqlx::query_as::<_, AccommodationRow>(SQL_GET_ACCOMMODATION_IN_TRIP)
        .bind(accommodation_id)
        .bind(trip_id)
        .fetch_optional(pool)
        .await
}

pub struct UpdateAccommodation<'a> {
    pub stop_id: Option<&'a str>,
    pub name: Option<&'a str>,
    pub address: Option<&'a str>,
    pub check_in: Option<&'a str>,
    pub check_out: Option<&'a str>,
    pub booking_ref: Option<&'a str>,
    pub price_cents: Option<i64>,
    pub url: Option<&'a str>,
}

const SQL_UPDATE_ACCOMMODATION: &str = r#"
UPDATE accommodations SET
  stop_id = COALESCE(?3, stop_id),
  name = COALESCE(?4, name),
  address = COALESCE(?5, address),
  check_in = COALESCE(?6, check_in),
  check_out = COALESCE(?7, check_out),
  booking_ref = COALESCE(?8, booking_ref),
  price_cents = COALESCE(?9, price_cents),
  url = COALESCE(?10, url)
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn update_accommodation(
    pool: &SqlitePool,
    accommodation_id: &str,
    trip_id: &str,
    update: UpdateAccommodation<'_>,
) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_UPDATE_ACCOMMODATION)
        .bind(accommodation_id)
        .bind(trip_id)
        .bind(update.stop_id)
        .bind(update.name)
        .bind(update.address)
        .bind(update.check_in)
        .bind(update.check_out)
        .bind(update.booking_ref)
        .bind(update.price_cents)
        .bind(update.url)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

const SQL_DELETE_ACCOMMODATION: &str = r#"
DELETE FROM accommodations
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn delete_accommodation(
    pool: &SqlitePool,
    accommodation_id: &str,
    trip_id: &str,
) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_DELETE_ACCOMMODATION)
        .bind(accommodation_id)
        .bind(trip_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
