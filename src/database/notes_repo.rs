use sqlx::SqlitePool;

use crate::models::NoteRow;

pub struct NewNote<'a> {
    pub id: &'a str,
    pub trip_id: &'a str,
    pub stop_id: Option<&'a str>,
    pub author_id: Option<&'a str>,
    pub title: &'a str,
    pub body: &'a str,
    pub pinned: i64,
}

const SQL_INSERT_NOTE: &str = r#"
INSERT INTO notes (id, trip_id, stop_id, author_id, title, body, pinned)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub async fn insert_note(pool: &SqlitePool, note: NewNote<'_>) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_NOTE)
        .bind(note.id)
        .bind(note.trip_id)
        .bind(note.stop_id)
        .bind(note.author_id)
        .bind(note.title)
        .bind(note.body)
        .bind(note.pinned)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_LIST_NOTES: &str = r#"
SELECT id, trip_id, stop_id, author_id, title, body, pinned, created_at, updated_at
FROM notes
WHERE trip_id = ?1
ORDER BY pinned DESC, updated_at DESC, id DESC
"#;

pub async fn list_notes(pool: &SqlitePool, trip_id: &str) -> sqlx::Result<Vec<NoteRow>> {
    sqlx::query_as::<_, NoteRow>(SQL_LIST_NOTES)
        .bind(trip_id)
        .fetch_all(pool)
        .await
}

const SQL_GET_NOTE_IN_TRIP: &str = r#"
SELECT id, trip_id, stop_id, author_id, title, body, pinned, created_at, updated_at
FROM notes
WHERE id = ?1 AND trip_id = ?2
LIMIT 1
"#;

pub async fn get_note_in_trip(
    pool: &SqlitePool,
    note_id: &str,
    trip_id: &str,
) -> sqlx::Result<Option<NoteRow>> {
    sqlx::query_as::<_, NoteRow>(SQL_GET_NOTE_IN_TRIP)
        .bind(note_id)
        .bind(trip_id)
        .fetch_optional(pool)
        .await
}

pub struct UpdateNote<'a> {
    pub stop_id: Option<&'a str>,
    pub title: Option<&'a str>,
    pub body: Option<&'a str>,
    pub pinned: Option<i64>,
}

const SQL_UPDATE_NOTE: &str = r#"
UPDATE notes SET
  stop_id = COALESCE(?3, stop_id),
  title = COALESCE(?4, title),
  body = COALESCE(?5, body),
  pinned = COALESCE(?6, pinned),
  updated_at = datetime('now')
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn update_note(
    pool: &SqlitePool,
    note_id: &str,
    trip_id: &str,
    update: UpdateNote<'_>,
) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_UPDATE_NOTE)
        .bind(note_id)
        .bind(trip_id)
        .bind(update.stop_id)
        .bind(update.title)
        .bind(update.body)
        .bind(update.pinned)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

const SQL_DELETE_NOTE: &str = r#"
DELETE FROM notes
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn delete_note(pool: &SqlitePool, note_id: &str, trip_id: &str) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_DELETE_NOTE)
        .bind(note_id)
        .bind(trip_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
