use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct PollRow {
    pub id: String,
    pub trip_id: String,
    pub question: String,
    pub multi: i64,
    pub closed: i64,
    pub created_by: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct PollOptionRow {
    pub id: String,
    pub poll_id: String,
    pub label: String,
    pub position: i64,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct PollVoteRow {
    pub id: String,
    pub poll_id: String,
    pub option_id: String,
    pub traveler_id: String,
    pub created_at: String,
}
