use sqlx::SqlitePool;

use crate::models::{ExpenseRow, ExpenseSplitRow};

pub struct NewExpense<'a> {
    pub id: &'a str,
    pub trip_id: &'a str,
    pub payer_id: &'a str,
    pub stop_id: Option<&'a str>,
    pub description: &'a str,
    pub amount_cents: i64,
    pub currency: &'a str,
    pub category: Option<&'a str>,
    pub spent_at: Option<&'a str>,
}

const SQL_INSERT_EXPENSE: &str = r#"
INSERT INTO expenses (id, trip_id, payer_id, stop_id, description, amount_cents, currency, category, spent_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
"#;

pub async fn insert_expense(pool: &SqlitePool, expense: NewExpense<'_>) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_EXPENSE)
        .bind(expense.id)
        .bind(expense.trip_id)
        .bind(expense.payer_id)
        .bind(expense.stop_id)
        .bind(expense.description)
        .bind(expense.amount_cents)
        .bind(expense.currency)
        .bind(expense.category)
        .bind(expense.spent_at)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_INSERT_SPLIT: &str = r#"
INSERT INTO expense_splits (id, expense_id, traveler_id, share_cents)
VALUES (?1, ?2, ?3, ?4)
"#;

pub async fn insert_split(
    pool: &SqlitePool,
    id: &str,
    expense_id: &str,
    traveler_id: &str,
    share_cents: i64,
) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_SPLIT)
        .bind(id)
        .bind(expense_id)
        .bind(traveler_id)
        .bind(share_cents)
        .execute(pool)
        .await?;
    Ok(())
}

const SQL_LIST_EXPENSES: &str = r#"
SELECT id, trip_id, payer_id, stop_id, description, amount_cents, currency, category, spent_at, created_at
FROM expenses
WHERE trip_id = ?1
ORDER BY id ASC
"#;

pub async fn list_expenses(pool: &SqlitePool, trip_id: &str) -> sqlx::Result<Vec<ExpenseRow>> {
    sqlx::query_as::<_, ExpenseRow>(SQL_LIST_EXPENSES)
        .bind(trip_id)
        .fetch_all(pool)
        .await
}

const SQL_GET_EXPENSE_IN_TRIP: &str = r#"
SELECT id, trip_id, payer_id, stop_id, description, amount_cents, currency, category, spent_at, created_at
FROM expenses
WHERE id = ?1 AND trip_id = ?2
LIMIT 1
"#;

pub async fn get_expense_in_trip(
    pool: &SqlitePool,
    expense_id: &str,
    trip_id: &str,
) -> sqlx::Result<Option<ExpenseRow>> {
    sqlx::query_as::<_, ExpenseRow>(SQL_GET_EXPENSE_IN_TRIP)
        .bind(expense_id)
        .bind(trip_id)
        .fetch_optional(pool)
        .await
}

const SQL_LIST_SPLITS_FOR_EXPENSE: &str = r#"
SELECT id, expense_id, traveler_id, share_cents
FROM expense_splits
WHERE expense_id = ?1
ORDER BY id ASC
"#;

pub async fn list_splits_for_expense(
    pool: &SqlitePool,
    expense_id: &str,
) -> sqlx::Result<Vec<ExpenseSplitRow>> {
    sqlx::query_as::<_, ExpenseSplitRow>(SQL_LIST_SPLITS_FOR_EXPENSE)
        .bind(expense_id)
        .fetch_all(pool)
        .await
}

const SQL_LIST_SPLITS_FOR_TRIP: &str = r#"
SELECT s.id, s.expense_id, s.traveler_id, s.share_cents
FROM expense_splits s
JOIN expenses e ON e.id = s.expense_id
WHERE e.trip_id = ?1
ORDER BY s.id ASC
"#;

pub async fn list_splits_for_trip(
    pool: &SqlitePool,
    trip_id: &str,
) -> sqlx::Result<Vec<ExpenseSplitRow>> {
    sqlx::query_as::<_, ExpenseSplitRow>(SQL_LIST_SPLITS_FOR_TRIP)
        .bind(trip_id)
        .fetch_all(pool)
        .await
}

pub struct UpdateExpense<'a> {
    pub stop_id: Option<&'a str>,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
    pub spent_at: Option<&'a str>,
}

// amount_cents and payer_id are deliberately not updatable: the splits were
// validated against the amount at creation time. Re-enter the expense instead.
const SQL_UPDATE_EXPENSE: &str = r#"
UPDATE expenses SET
  stop_id = COALESCE(?3, stop_id),
  description = COALESCE(?4, description),
  category = COALESCE(?5, category),
  spent_at = COALESCE(?6, spent_at)
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn update_expense(
    pool: &SqlitePool,
    expense_id: &str,
    trip_id: &str,
    update: UpdateExpense<'_>,
) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_UPDATE_EXPENSE)
        .bind(expense_id)
        .bind(trip_id)
        .bind(update.stop_id)
        .bind(update.description)
        .bind(update.category)
        .bind(update.spent_at)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

const SQL_DELETE_SPLITS_FOR_EXPENSE: &str = r#"
DELETE FROM expense_splits
WHERE expense_id = ?1
"#;

const SQL_DELETE_EXPENSE: &str = r#"
DELETE FROM expenses
WHERE id = ?1 AND trip_id = ?2
"#;

pub async fn delete_expense(
    pool: &SqlitePool,
    expense_id: &str,
    trip_id: &str,
) -> sqlx::Result<u64> {
    let result = sqlx::query(SQL_DELETE_EXPENSE)
        .bind(expense_id)
        .bind(trip_id)
        .execute(pool)
        .await?;
    if result.rows_affected() > 0 {
        sqlx::query(SQL_DELETE_SPLITS_FOR_EXPENSE)
            .bind(expense_id)
            .execute(pool)
            .await?;
    }
    Ok(result.rows_affected())
}
