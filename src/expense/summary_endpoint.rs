use axum::{Json, extract::State};

use crate::{
    Error,
    expense::{CategoryTotal, ExpenseState, ExpenseStore, Summary},
};

/// A route handler for the total, average and count of all expenses.
pub async fn get_summary_endpoint<S>(
    State(state): State<ExpenseState<S>>,
) -> Result<Json<Summary>, Error>
where
    S: ExpenseStore + Send + Sync,
{
    let summary = state.expense_store.summarize()?;

    Ok(Json(summary))
}

/// A route handler for the total spent in each category, largest first.
pub async fn get_category_summary_endpoint<S>(
    State(state): State<ExpenseState<S>>,
) -> Result<Json<Vec<CategoryTotal>>, Error>
where
    S: ExpenseStore + Send + Sync,
{
    let totals = state.expense_store.summarize_by_category()?;

    Ok(Json(totals))
}
