//! Expense API endpoints

use api_types::expense::{Expense, ExpenseNew};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

/// Handle requests for listing every expense
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Expense>> {
    let store = state.store.read().await;
    Json(store.expenses().to_vec())
}

/// Handle requests for creating a new expense
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<Expense>), ServerError> {
    if !payload.amount.is_finite() {
        return Err(ServerError::Generic("amount must be a number".to_string()));
    }

    let expense = state.store.write().await.create_expense(payload);
    tracing::debug!(id = %expense.id, "expense created");
    Ok((StatusCode::CREATED, Json(expense)))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Expense>, ServerError> {
    let store = state.store.read().await;
    store
        .expense(&id)
        .cloned()
        .map(Json)
        .ok_or(ServerError::NotFound(id))
}

/// Handle requests for deleting an expense; responds with the removed record
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Expense>, ServerError> {
    let removed = state.store.write().await.remove_expense(&id);
    match removed {
        Some(expense) => {
            tracing::debug!(id = %expense.id, "expense deleted");
            Ok(Json(expense))
        }
        None => Err(ServerError::NotFound(id)),
    }
}
