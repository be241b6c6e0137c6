use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct TripRow {
    pub id: String,
    pub name: String,
    pub code: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: String,
}
