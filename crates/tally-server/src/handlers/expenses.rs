//! Expense handlers

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use tracing::warn;

use crate::{AppError, AppState};
use tally_core::models::{ExpenseRecord, NewExpense, SpendingReport};

#[derive(Serialize)]
pub struct ExpenseCreatedResponse {
    pub message: String,
    pub expense: ExpenseRecord,
}

/// GET /api/expenses - Spending report over every stored expense
pub async fn get_report(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SpendingReport>, AppError> {
    let report = state.service.report(state.today())?;
    Ok(Json(report))
}

/// POST /api/expenses - Record a new expense
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewExpense>, JsonRejection>,
) -> Result<Json<ExpenseCreatedResponse>, AppError> {
    let Json(new) = payload.map_err(|e| {
        warn!(error = %e, "Rejected expense body");
        AppError::bad_request("Invalid item or price")
    })?;

    let expense = state.service.add_expense(new, state.today())?;

    Ok(Json(ExpenseCreatedResponse {
        message: "Expense added successfully!".to_string(),
        expense,
    }))
}
