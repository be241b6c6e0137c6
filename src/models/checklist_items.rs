use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ChecklistItemRow {
    pub id: String,
    pub trip_id: String,
    pub traveler_id: Option<String>,
    pub label: String,
    pub category: Option<String>,
    pub done: i64,
    pub created_at: String,
}
