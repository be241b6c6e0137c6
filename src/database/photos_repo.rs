use sqlx::SqlitePool;

use crate::models::PhotoRow;

pub struct NewPhoto<'a> {
    pub id: &'a str,
    pub trip_id: &'a str,
    pub stop_id: Option<&'a str>,
    pub uploader_id: Option<&'a str>,
    pub url: &'a str,
    pub caption: Option<&'a str>,
    pub taken_at: Option<&'a str>,
}

const SQL_INSERT_PHOTO: &str = r#"
INSERT INTO photos (id, trip_id, stop_id, uploader_id, url, caption, taken_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub async fn insert_photo(pool: &SqlitePool, photo: NewPhoto<'_>) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_PHOTO)
        .bind(photo.id)
        .bind(photo.trip_id)
        .bind(photo.stop_id)
        .bind(photo.uploader_id)
        .bind(photo.url)
        .bind(photo.caption)
        .bind(photo.taken_at)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_LIST_PHOTOS: &str = r#"
SELECT id, trip_id, stop_id, uploader_id, url, caption, taken_at, created_at
FROM photos
WHERE trip_id = ?1
ORDER BY taken_at DESC, id DESC
"#;

pub async fn list_photos(pool: &SqlitePool, trip_id: &str) -> sqlx::Result<Vec<PhotoRow>> {
    sqlx::query_as::<_, PhotoRow>(SQL_LIST_PHOTOS)
        .bind(trip_id)
        .fetch_all(pool)
        .await
}

const SQL_GET_PHOTO_IN_TRIP: &str = r#"
SELECT id, trip_id, stop_id, uploader_id, url, caption, taken_at, created_at
FROM photos
WHERE id = ?1 AND trip_id = ?2
LIMIT 1
"#;

pub async fn get_photo_in_trip(
    pool: &SqlitePool,
    photo_id: &str,
    trip_id: &str,
) -> sqlx::Result<Option<PhotoRow>> {
    sqlx::query_as::<_, PhotoRow>(SQL_GET_PHOTO_IN_TRIP)
        .bind(photo_id)
        .bind(trip_id)
        .fetch_optional(pool)
        .await
}

pub struct UpdatePhoto<'a> {
    pub stop_id: Option<&'a str>,
    pub caption: Option<&'a str>,
    pub taken_at: Option<&'a str>,
}

const SQL_UPDATE_PHOTO: &str = r#"
UPDATE photos SET
  stop_id = COALESCE(?3, stop_id),
  caption = COALESCE(?4, caption),
  taken_at = COALESCE(?5, taken_at)
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn update_photo(
    pool: &SqlitePool,
    photo_id: &str,
    trip_id: &str,
    update: UpdatePhoto<'_>,
) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_UPDATE_PHOTO)
        .bind(photo_id)
        .bind(trip_id)
        .bind(update.stop_id)
        .bind(update.caption)
        .bind(update.taken_at)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

const SQL_DELETE_PHOTO: &str = r#"
DELETE FROM photos
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn delete_photo(pool: &SqlitePool, photo_id: &str, trip_id: &str) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_DELETE_PHOTO)
        .bind(photo_id)
        .bind(trip_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
