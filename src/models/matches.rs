use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct MatchRow {
    pub id: String,
    pub trip_id: String,
    pub stop_id: Option<String>,
    pub home_team: String,
    pub away_team: String,
    pub venue: Option<String>,
    pub kickoff_at: Option<String>,
    pub stage: Option<String>,
    pub ticket_status: Option<String>,
    pub created_at: String,
}
