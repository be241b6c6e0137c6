use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct TravelerRow {
    pub id: String,
    pub trip_id: String,
    pub name: String,
    pub color: Option<String>,
    pub created_at: String,
}
