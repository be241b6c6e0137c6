use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct PhotoRow {
    pub id: String,
    pub trip_id: String,
    pub stop_id: Option<String>,
    pub uploader_id: Option<String>,
    pub url: String,
    pub caption: Option<String>,
    pub taken_at: Option<String>,
    pub created_at: String,
}
