use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct PredictionRow {
    pub id: String,
    pub trip_id: String,
    pub traveler_id: String,
    pub match_id: String,
    pub home_score: i64,
    pub away_score: i64,
    pub created_at: String,
    pub updated_at: String,
}
