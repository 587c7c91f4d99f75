use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    expense::{ExpenseId, ExpenseState, ExpenseStore},
};

/// A JSON body confirming that an action succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// A human-readable description of what happened.
    pub message: String,
}

/// A route handler for deleting a single expense.
///
/// Responds with 404 if the expense does not exist.
pub async fn delete_expense_endpoint<S>(
    State(state): State<ExpenseState<S>>,
    WithRejection(Path(expense_id), _): WithRejection<Path<ExpenseId>, Error>,
) -> Result<Json<MessageResponse>, Error>
where
    S: ExpenseStore + Send + Sync,
{
    state.expense_store.delete(expense_id)?;

    Ok(Json(MessageResponse {
        message: "Expense deleted successfully".to_owned(),
    }))
}

/// A route handler for deleting every expense.
///
/// The response message includes how many expenses were deleted.
pub async fn delete_all_expenses_endpoint<S>(
    State(state): State<ExpenseState<S>>,
) -> Result<Json<MessageResponse>, Error>
where
    S: ExpenseStore + Send + Sync,
{
    let count = state.expense_store.delete_all()?;
    tracing::info!("Deleted all {count} expenses");

    Ok(Json(MessageResponse {
        message: format!("Deleted {count} expenses"),
    }))
}
