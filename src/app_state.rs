//! Implements a struct that holds the state of the REST server.

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    expense::{ExpenseStore, SQLiteExpenseStore},
    timezone::get_local_offset,
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<S>
where
    S: ExpenseStore + Send + Sync,
{
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// Used to timestamp expenses that are created without a date.
    pub local_timezone: String,

    /// The directory the web client is served from.
    pub static_dir: PathBuf,

    /// The store for managing [expenses](crate::expense::Expense).
    pub expense_store: S,
}

impl<S> AppState<S>
where
    S: ExpenseStore + Send + Sync,
{
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an [Error::InvalidTimezone] if `local_timezone` is not a known timezone.
    pub fn new(
        local_timezone: &str,
        static_dir: impl Into<PathBuf>,
        expense_store: S,
    ) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezone(local_timezone.to_owned()));
        }

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            static_dir: static_dir.into(),
            expense_store,
        })
    }
}

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteExpenseStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the domain
/// models to the database.
///
/// # Errors
/// Returns an error if the database cannot be initialized or the timezone is invalid.
pub fn create_app_state(
    db_connection: Connection,
    local_timezone: &str,
    static_dir: impl Into<PathBuf>,
) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));
    let expense_store = SQLiteExpenseStore::new(connection);

    AppState::new(local_timezone, static_dir, expense_store)
}
