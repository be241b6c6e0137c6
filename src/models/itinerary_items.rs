use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ItineraryItemRow {
    pub id: String,
    pub trip_id: String,
    pub stop_id: Option<String>,
    pub title: String,
    pub day: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub kind: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}
