use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct NoteRow {
    pub id: String,
    pub trip_id: String,
    pub stop_id: Option<String>,
    pub author_id: Option<String>,
    pub title: String,
    pub body: String,
    pub pinned: i64,
    pub created_at: String,
    pub updated_at: String,
}
