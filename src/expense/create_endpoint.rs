use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use crate::{
    AppState, Error,
    expense::{Expense, ExpenseForm, ExpenseStore, current_timestamp},
    timezone::get_local_offset,
};

/// The state needed to create an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState<S>
where
    S: ExpenseStore + Send + Sync,
{
    /// The store for managing expenses.
    pub expense_store: S,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl<S> FromRef<AppState<S>> for CreateExpenseState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler for creating a new expense.
///
/// Expenses without a date are dated with the current time in the server's
/// local timezone. Responds with 201 and the stored expense, or 400 if the
/// body fails validation.
pub async fn create_expense_endpoint<S>(
    State(state): State<CreateExpenseState<S>>,
    WithRejection(Json(form), _): WithRejection<Json<ExpenseForm>, Error>,
) -> Result<(StatusCode, Json<Expense>), Error>
where
    S: ExpenseStore + Send + Sync,
{
    let local_offset = get_local_offset(&state.local_timezone)
        .ok_or_else(|| Error::InvalidTimezone(state.local_timezone.clone()))?;
    let now = current_timestamp(local_offset)?;

    let new_expense = form.into_new_expense(&now)?;
    let expense = state.expense_store.create(new_expense)?;

    Ok((StatusCode::CREATED, Json(expense)))
}
