use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::warn;

use crate::database::expenses_repo;
use crate::services::activity_log_service;
use crate::services::expense_service::{self, CreateExpenseError, SplitInput};
use crate::web::middleware::auth::TripSession;
use crate::web::routes::{bad_request, internal_error, not_found, optional, required};

pub async fn list_expenses_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
) -> Response {
    let expenses = match expenses_repo::list_expenses(&pool, &session.trip_id).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!("Expense list failed: {}", e);
            return internal_error();
        }
    };
    let splits = match expenses_repo::list_splits_for_trip(&pool, &session.trip_id).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!("Expense split list failed: {}", e);
            return internal_error();
        }
    };

    let items: Vec<_> = expenses
        .into_iter()
        .map(|expense| {
            let expense_splits: Vec<_> = splits
                .iter()
                .filter(|s| s.expense_id == expense.id)
                .collect();
            json!({ "expense": expense, "splits": expense_splits })
        })
        .collect();
    Json(items).into_response()
}

#[derive(Debug, Deserialize)]
pub struct CreateExpensePayload {
    pub payer_id: Option<String>,
    pub stop_id: Option<String>,
    pub description: Option<String>,
    pub amount_cents: Option<i64>,
    pub currency: Option<String>,
    pub category: Option<String>,
    pub spent_at: Option<String>,
    #[serde(default)]
    pub splits: Vec<SplitInput>,
}

pub async fn create_expense_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateExpensePayload>,
) -> Response {
    let Some(description) = required(&payload.description) else {
        return bad_request("description is required");
    };
    let Some(amount_cents) = payload.amount_cents.filter(|a| *a > 0) else {
        return bad_request("amount_cents must be a positive integer");
    };
    let payer_id = match optional(&payload.payer_id) {
        Some(p) => p.to_string(),
        // Defaults to whoever is logged in; most expenses are self-reported.
        None => session.traveler_id.clone(),
    };

    let created = expense_service::create_expense(
        &pool,
        &session.trip_id,
        expense_service::NewExpenseInput {
            payer_id: &payer_id,
            stop_id: optional(&payload.stop_id),
            description,
            amount_cents,
            currency: optional(&payload.currency).unwrap_or("EUR"),
            category: optional(&payload.category),
            spent_at: optional(&payload.spent_at),
            splits: payload.splits,
        },
    )
    .await;

    let expense = match created {
        Ok(row) => row,
        Err(CreateExpenseError::InvalidSplits(msg)) => return bad_request(msg),
        Err(CreateExpenseError::UnknownTraveler) => return not_found("traveler not found"),
        Err(CreateExpenseError::UnknownStop) => return not_found("stop not found"),
        Err(CreateExpenseError::Db(e)) => {
            warn!("Expense create failed: {}", e);
            return internal_error();
        }
    };

    activity_log_service::record(
        &pool,
        &session.trip_id,
        Some(&session.traveler_id),
        "created",
        "expense",
        Some(&expense.id),
        Some(description),
    )
    .await;

    let splits = match expense_service::splits_for_expense(&pool, &expense.id).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!("Expense split reload failed for {}: {}", expense.id, e);
            return internal_error();
        }
    };
    (
        StatusCode::CREATED,
        Json(json!({ "expense": expense, "splits": splits })),
    )
        .into_response()
}

#[derive(Debug, Deserialize)]
pub struct UpdateExpensePayload {
    pub stop_id: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub spent_at: Option<String>,
}

pub async fn update_expense_handler(
    Extension(session): Extension<TripSession>,
    Path(expense_id): Path<String>,
    State(pool): State<SqlitePool>,
    Json(payload): Json<UpdateExpensePayload>,
) -> Response {
    let affected = match expenses_repo::update_expense(
        &pool,
        &expense_id,
        &session.trip_id,
        expenses_repo::UpdateExpense {
            stop_id: optional(&payload.stop_id),
            description: optional(&payload.description),
            category: optional(&payload.category),
            spent_at: optional(&payload.spent_at),
        },
    )
    .await
    {
        Ok(n) => n,
        Err(e) => {
            warn!("Expense update failed for {}: {}", expense_id, e);
            return internal_error();
        }
    };
    if affected == 0 {
        return not_found("expense not found");
    }

    activity_log_service::record(
        &pool,
        &session.trip_id,
        Some(&session.traveler_id),
        "updated",
        "expense",
        Some(&expense_id),
        None,
    )
    .await;

    match expenses_repo::get_expense_in_trip(&pool, &expense_id, &session.trip_id).await {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => not_found("expense not found"),
        Err(e) => {
            warn!("Expense reload failed for {}: {}", expense_id, e);
            internal_error()
        }
    }
}

pub async fn delete_expense_handler(
    Extension(session): Extension<TripSession>,
    Path(expense_id): Path<String>,
    State(pool): State<SqlitePool>,
) -> Response {
    match expenses_repo::delete_expense(&pool, &expense_id, &session.trip_id).await {
        Ok(0) => not_found("expense not found"),
        Ok(_) => {
            activity_log_service::record(
                &pool,
                &session.trip_id,
                Some(&session.traveler_id),
                "deleted",
                "expense",
                Some(&expense_id),
                None,
            )
            .await;
            Json(json!({ "ok": true })).into_response()
        }
        Err(e) => {
            warn!("Expense delete failed for {}: {}", expense_id, e);
            internal_error()
        }
    }
}

pub async fn expense_summary_handler(
    Extension(session): Extension<TripSession>,
    State(pool): State<SqlitePool>,
) -> Response {
    match expense_service::expense_summary(&pool, &session.trip_id).await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => {
            warn!("Expense summary failed: {}", e);
            internal_error()
        }
    }
}
