use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct StopRow {
    pub id: String,
    pub trip_id: String,
    pub city: String,
    pub country: Option<String>,
    pub arrival_date: Option<String>,
    pub departure_date: Option<String>,
    pub position: i64,
    pub notes: Option<String>,
    pub created_at: String,
}
