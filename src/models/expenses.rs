use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ExpenseRow {
    pub id: String,
    pub trip_id: String,
    pub payer_id: String,
    pub stop_id: Option<String>,
    pub description: String,
    pub amount_cents: i64,
    pub currency: String,
    pub category: Option<String>,
    pub spent_at: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ExpenseSplitRow {
    pub id: String,
    pub expense_id: String,
    pub traveler_id: String,
    pub share_cents: i64,
}
