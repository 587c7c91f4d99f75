#![allow(missing_docs)]

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    SQLAppState, create_app_state,
    expense::{Expense, ExpenseStore, NewExpense, SQLiteExpenseStore},
    initialize_db,
};

pub(crate) fn must_create_test_store() -> SQLiteExpenseStore {
    let connection =
        Connection::open_in_memory().expect("could not create in-memory SQLite database");
    initialize_db(&connection).expect("could not initialize test DB");

    SQLiteExpenseStore::new(Arc::new(Mutex::new(connection)))
}

pub(crate) fn must_create_test_app_state() -> SQLAppState {
    let connection =
        Connection::open_in_memory().expect("could not create in-memory SQLite database");

    create_app_state(connection, "Etc/UTC", "static").expect("could not create app state")
}

pub(crate) fn must_create_expense(
    store: &impl ExpenseStore,
    title: &str,
    amount: f64,
    date: &str,
) -> Expense {
    let expense = NewExpense::new(title, "Food", amount, date).expect("invalid test expense");

    store
        .create(expense)
        .expect("could not create test expense")
}
