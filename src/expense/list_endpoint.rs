//! Route handlers for reading expenses.

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use axum_extra::extract::WithRejection;

use crate::{
    AppState, Error,
    expense::{Expense, ExpenseId, ExpenseStore, MonthRange},
};

/// The state needed to read, edit or delete expenses.
#[derive(Debug, Clone)]
pub struct ExpenseState<S>
where
    S: ExpenseStore + Send + Sync,
{
    /// The store for managing expenses.
    pub expense_store: S,
}

impl<S> FromRef<AppState<S>> for ExpenseState<S>
where
    S: ExpenseStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// A route handler for listing all expenses, most recent first.
pub async fn list_expenses_endpoint<S>(
    State(state): State<ExpenseState<S>>,
) -> Result<Json<Vec<Expense>>, Error>
where
    S: ExpenseStore + Send + Sync,
{
    let expenses = state.expense_store.get_all()?;

    Ok(Json(expenses))
}

/// A route handler for getting a single expense by its ID.
///
/// Responds with 404 if the expense does not exist.
pub async fn get_expense_endpoint<S>(
    State(state): State<ExpenseState<S>>,
    WithRejection(Path(expense_id), _): WithRejection<Path<ExpenseId>, Error>,
) -> Result<Json<Expense>, Error>
where
    S: ExpenseStore + Send + Sync,
{
    let expense = state.expense_store.get(expense_id)?;

    Ok(Json(expense))
}

/// A route handler for listing the expenses in a calendar month, most recent first.
///
/// A month outside 1-12 cannot contain any expenses, so an empty list is returned.
pub async fn get_expenses_by_month_endpoint<S>(
    State(state): State<ExpenseState<S>>,
    WithRejection(Path((year, month)), _): WithRejection<Path<(i32, u32)>, Error>,
) -> Result<Json<Vec<Expense>>, Error>
where
    S: ExpenseStore + Send + Sync,
{
    let month_range = u8::try_from(month)
        .ok()
        .and_then(|month| MonthRange::new(year, month));

    let expenses = match month_range {
        Some(month_range) => state.expense_store.get_by_month(&month_range)?,
        None => {
            tracing::debug!("No expenses can fall in month {month} of {year}");
            Vec::new()
        }
    };

    Ok(Json(expenses))
}

#[cfg(test)]
mod tests {
    use std::marker::PhantomData;

    use axum::extract::{Path, State};
    use axum_extra::extract::WithRejection;

    use crate::{
        Error,
        expense::{
            ExpenseState, get_expense_endpoint, get_expenses_by_month_endpoint,
            list_expenses_endpoint,
        },
        test_utils::{must_create_expense, must_create_test_store},
    };

    #[tokio::test]
    async fn lists_most_recent_first() {
        let store = must_create_test_store();
        let older = must_create_expense(&store, "Lunch", 250.0, "2026-02-01T12:00:00");
        let newer = must_create_expense(&store, "Dinner", 450.0, "2026-02-01T19:00:00");
        let state = ExpenseState {
            expense_store: store,
        };

        let expenses = list_expenses_endpoint(State(state)).await.unwrap().0;

        assert_eq!(expenses, vec![newer, older]);
    }

    #[tokio::test]
    async fn get_missing_expense_is_not_found() {
        let state = ExpenseState {
            expense_store: must_create_test_store(),
        };

        let result = get_expense_endpoint(State(state), WithRejection(Path(7), PhantomData)).await;

        assert_eq!(result.map(|json| json.0), Err(Error::NotFound));
    }

    #[tokio::test]
    async fn month_filter_uses_half_open_range() {
        let store = must_create_test_store();
        let december = must_create_expense(&store, "Gifts", 100.0, "2026-12-24");
        must_create_expense(&store, "Party", 50.0, "2027-01-01");
        let state = ExpenseState {
            expense_store: store,
        };

        let expenses = get_expenses_by_month_endpoint(
            State(state),
            WithRejection(Path((2026, 12)), PhantomData),
        )
        .await
        .unwrap()
        .0;

        assert_eq!(expenses, vec![december]);
    }

    #[tokio::test]
    async fn invalid_month_returns_empty_list() {
        let store = must_create_test_store();
        must_create_expense(&store, "Gifts", 100.0, "2026-12-24");
        let state = ExpenseState {
            expense_store: store,
        };

        let expenses = get_expenses_by_month_endpoint(
            State(state),
            WithRejection(Path((2026, 13)), PhantomData),
        )
        .await
        .unwrap()
        .0;

        assert!(expenses.is_empty());
    }
}
