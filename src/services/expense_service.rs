use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::{expenses_repo, stops_repo, travelers_repo};
use crate::models::{ExpenseRow, ExpenseSplitRow};
use crate::services::settlement_service::{self, Transfer, TravelerBalance};

#[derive(Debug, Deserialize)]
pub struct SplitInput {
    pub traveler_id: String,
    pub share_cents: i64,
}

#[derive(Debug)]
pub enum CreateExpenseError {
    InvalidSplits(&'static str),
    UnknownTraveler,
    UnknownStop,
    Db(sqlx::Error),
}

impl From<sqlx::Error> for CreateExpenseError {
    fn from(e: sqlx::Error) -> Self {
        CreateExpenseError::Db(e)
    }
}

pub struct NewExpenseInput<'a> {
    pub payer_id: &'a str,
    pub stop_id: Option<&'a str>,
    pub description: &'a str,
    pub amount_cents: i64,
    pub currency: &'a str,
    pub category: Option<&'a str>,
    pub spent_at: Option<&'a str>,
    pub splits: Vec<SplitInput>,
}

/// Creates an expense plus its splits. An empty split list means "split
/// evenly over everyone"; leftover cents go to the earliest travelers.
pub async fn create_expense(
    pool: &SqlitePool,
    trip_id: &str,
    input: NewExpenseInput<'_>,
) -> Result<ExpenseRow, CreateExpenseError> {
    if travelers_repo::get_traveler_in_trip(pool, input.payer_id, trip_id)
        .await?
        .is_none()
    {
        return Err(CreateExpenseError::UnknownTraveler);
    }
    if let Some(stop_id) = input.stop_id {
        if stops_repo::get_stop_in_trip(pool, stop_id, trip_id)
            .await?
            .is_none()
        {
            return Err(CreateExpenseError::UnknownStop);
        }
    }

    let splits = if input.splits.is_empty() {
        let travelers = travelers_repo::list_travelers(pool, trip_id).await?;
        even_splits(input.amount_cents, travelers.iter().map(|t| t.id.as_str()))
    } else {
        let total: i64 = input.splits.iter().map(|s| s.share_cents).sum();
        if total != input.amount_cents {
            return Err(CreateExpenseError::InvalidSplits(
                "splits must sum to amount_cents",
            ));
        }
        if input.splits.iter().any(|s| s.share_cents < 0) {
            return Err(CreateExpenseError::InvalidSplits(
                "share_cents must not be negative",
            ));
        }
        for split in &input.splits {
            if travelers_repo::get_traveler_in_trip(pool, &split.traveler_id, trip_id)
                .await?
                .is_none()
            {
                return Err(CreateExpenseError::UnknownTraveler);
            }
        }
        input
            .splits
            .iter()
            .map(|s| (s.traveler_id.clone(), s.share_cents))
            .collect()
    };

    let expense_id = Uuid::now_v7().to_string();
    expenses_repo::insert_expense(
        pool,
        expenses_repo::NewExpense {
            id: &expense_id,
            trip_id,
            payer_id: input.payer_id,
            stop_id: input.stop_id,
            description: input.description,
            amount_cents: input.amount_cents,
            currency: input.currency,
            category: input.category,
            spent_at: input.spent_at,
        },
    )
    .await?;

    for (traveler_id, share_cents) in splits {
        let split_id = Uuid::now_v7().to_string();
        expenses_repo::insert_split(pool, &split_id, &expense_id, &traveler_id, share_cents)
            .await?;
    }

    let row = expenses_repo::get_expense_in_trip(pool, &expense_id, trip_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;
    Ok(row)
}

fn even_splits<'a>(amount_cents: i64, travelers: impl Iterator<Item = &'a str>) -> Vec<(String, i64)> {
    let ids: Vec<&str> = travelers.collect();
    if ids.is_empty() {
        return vec![];
    }
    let n = ids.len() as i64;
    let base = amount_cents / n;
    let remainder = amount_cents % n;
    ids.iter()
        .enumerate()
        .map(|(i, id)| {
            let extra = if (i as i64) < remainder { 1 } else { 0 };
            (id.to_string(), base + extra)
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct CurrencySummary {
    pub currency: String,
    pub balances: Vec<TravelerBalance>,
    pub transfers: Vec<Transfer>,
}

/// Per-traveler paid/owed totals and settlement transfers, one group per
/// currency. No conversion between currencies.
pub async fn expense_summary(
    pool: &SqlitePool,
    trip_id: &str,
) -> sqlx::Result<Vec<CurrencySummary>> {
    let expenses = expenses_repo::list_expenses(pool, trip_id).await?;
    let splits = expenses_repo::list_splits_for_trip(pool, trip_id).await?;

    let by_expense: BTreeMap<&str, &ExpenseRow> =
        expenses.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut paid: BTreeMap<String, Vec<(String, i64)>> = BTreeMap::new();
    for expense in &expenses {
        paid.entry(expense.currency.clone())
            .or_default()
            .push((expense.payer_id.clone(), expense.amount_cents));
    }

    let mut owed: BTreeMap<String, Vec<(String, i64)>> = BTreeMap::new();
    for split in &splits {
        let Some(expense) = by_expense.get(split.expense_id.as_str()) else {
            continue;
        };
        owed.entry(expense.currency.clone())
            .or_default()
            .push((split.traveler_id.clone(), split.share_cents));
    }

    let mut currencies: Vec<String> = paid.keys().cloned().collect();
    for currency in owed.keys() {
        if !currencies.contains(currency) {
            currencies.push(currency.clone());
        }
    }
    currencies.sort();

    let empty: Vec<(String, i64)> = vec![];
    Ok(currencies
        .into_iter()
        .map(|currency| {
            let balances = settlement_service::build_balances(
                paid.get(&currency).unwrap_or(&empty),
                owed.get(&currency).unwrap_or(&empty),
            );
            let transfers = settlement_service::settle(&balances);
            CurrencySummary {
                currency,
                balances,
                transfers,
            }
        })
        .collect())
}

pub async fn splits_for_expense(
    pool: &SqlitePool,
    expense_id: &str,
) -> sqlx::Result<Vec<ExpenseSplitRow>> {
    expenses_repo::list_splits_for_expense(pool, expense_id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_split_divides_exactly() {
        let splits = even_splits(3000, ["a", "b", "c"].into_iter());
        assert_eq!(
            splits,
            vec![
                ("a".to_string(), 1000),
                ("b".to_string(), 1000),
                ("c".to_string(), 1000),
            ]
        );
    }

    #[test]
    fn even_split_gives_remainder_to_earliest() {
        let splits = even_splits(1000, ["a", "b", "c"].into_iter());
        assert_eq!(
            splits,
            vec![
                ("a".to_string(), 334),
                ("b".to_string(), 333),
                ("c".to_string(), 333),
            ]
        );
        let total: i64 = splits.iter().map(|(_, c)| c).sum();
        assert_eq!(total, 1000);
    }

    #[test]
    fn even_split_with_no_travelers_is_empty() {
        assert!(even_splits(1000, std::iter::empty()).is_empty());
    }
}
