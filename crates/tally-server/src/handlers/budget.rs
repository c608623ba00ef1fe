//! Budget handlers

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct UpdateBudgetRequest {
    pub amount: f64,
}

#[derive(Serialize)]
pub struct BudgetResponse {
    pub current_budget: f64,
}

/// GET /api/budget - Effective monthly budget
pub async fn get_budget(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BudgetResponse>, AppError> {
    Ok(Json(BudgetResponse {
        current_budget: state.service.current_budget()?,
    }))
}

/// PUT /api/budget - Set the monthly budget
pub async fn update_budget(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateBudgetRequest>, JsonRejection>,
) -> Result<Json<BudgetResponse>, AppError> {
    let Json(req) = payload.map_err(|_| AppError::bad_request("Expected {\"amount\": number}"))?;

    state.service.set_budget(req.amount)?;

    Ok(Json(BudgetResponse {
        current_budget: state.service.current_budget()?,
    }))
}
