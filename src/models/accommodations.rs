use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct AccommodationRow {
    pub id: String,
    pub trip_id: String,
    pub stop_id: String,
    pub name: String,
    pub address: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub booking_ref: Option<String>,
    pub price_cents: Option<i64>,
    pub url: Option<String>,
    pub created_at: String,
}
