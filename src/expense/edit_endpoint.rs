use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;

use crate::{
    Error,
    expense::{Expense, ExpenseForm, ExpenseId, ExpenseState, ExpenseStore},
};

/// A route handler for replacing the title, category and amount of an expense.
///
/// The date of the expense is never changed, even if the body contains one.
/// Responds with 404 if the expense does not exist, or 400 if the body fails
/// validation. Validation happens before the store is touched.
pub async fn edit_expense_endpoint<S>(
    State(state): State<ExpenseState<S>>,
    WithRejection(Path(expense_id), _): WithRejection<Path<ExpenseId>, Error>,
    WithRejection(Json(form), _): WithRejection<Json<ExpenseForm>, Error>,
) -> Result<Json<Expense>, Error>
where
    S: ExpenseStore + Send + Sync,
{
    let update = form.into_expense_update()?;

    let expense = state.expense_store.update(expense_id, update)?;

    Ok(Json(expense))
}

#[cfg(test)]
mod test {
    use std::{
        marker::PhantomData,
        sync::{Arc, Mutex},
    };

    use axum::{
        Json,
        extract::{Path, State},
    };
    use axum_extra::extract::WithRejection;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        Error,
        expense::{
            ExpenseState, ExpenseStore, SQLiteExpenseStore, ValidationError,
            edit_expense_endpoint,
        },
        initialize_db,
        test_utils::{must_create_expense, must_create_test_store},
    };

    #[tokio::test]
    async fn can_update_expense() {
        let store = must_create_test_store();
        let created = must_create_expense(&store, "Lunch", 250.0, "2026-02-01T12:00:00");
        let state = ExpenseState {
            expense_store: store,
        };

        let Json(updated) = edit_expense_endpoint(
            State(state.clone()),
            WithRejection(Path(created.id), PhantomData),
            WithRejection(
                Json(
                    serde_json::from_value(json!({
                        "title": "Dinner",
                        "category": "Eating out",
                        "amount": 450.0,
                        "date": "1999-01-01"
                    }))
                    .unwrap(),
                ),
                PhantomData,
            ),
        )
        .await
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.date, created.date);
        assert_eq!(updated.title, "Dinner");
        assert_eq!(updated.category, "Eating out");
        assert_eq!(updated.amount, 450.0);
        assert_eq!(state.expense_store.get(created.id), Ok(updated));
    }

    #[tokio::test]
    async fn update_missing_expense_is_not_found() {
        let state = ExpenseState {
            expense_store: must_create_test_store(),
        };

        let result = edit_expense_endpoint(
            State(state),
            WithRejection(Path(42), PhantomData),
            WithRejection(
                Json(
                    serde_json::from_value(json!({"title": "a", "category": "b", "amount": 1}))
                        .unwrap(),
                ),
                PhantomData,
            ),
        )
        .await;

        assert_eq!(result.map(|json| json.0), Err(Error::NotFound));
    }

    #[tokio::test]
    async fn invalid_body_leaves_expense_unchanged() {
        let store = must_create_test_store();
        let created = must_create_expense(&store, "Lunch", 250.0, "2026-02-01");
        let state = ExpenseState {
            expense_store: store,
        };

        let result = edit_expense_endpoint(
            State(state.clone()),
            WithRejection(Path(created.id), PhantomData),
            WithRejection(
                Json(
                    serde_json::from_value(json!({"title": "", "category": "b", "amount": 1}))
                        .unwrap(),
                ),
                PhantomData,
            ),
        )
        .await;

        assert_eq!(
            result.map(|json| json.0),
            Err(Error::InvalidExpense(ValidationError::MissingFields))
        );
        assert_eq!(state.expense_store.get(created.id), Ok(created));
    }

    #[tokio::test]
    async fn storage_error_is_returned_unchanged() {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).unwrap();
        let connection = Arc::new(Mutex::new(connection));
        let state = ExpenseState {
            expense_store: SQLiteExpenseStore::new(connection.clone()),
        };
        connection
            .lock()
            .unwrap()
            .execute("DROP TABLE expense", ())
            .unwrap();

        let result = edit_expense_endpoint(
            State(state),
            WithRejection(Path(1), PhantomData),
            WithRejection(
                Json(
                    serde_json::from_value(json!({"title": "a", "category": "b", "amount": 1}))
                        .unwrap(),
                ),
                PhantomData,
            ),
        )
        .await;

        assert!(matches!(
            result.map(|json| json.0),
            Err(Error::SqlError(_))
        ));
    }
}
