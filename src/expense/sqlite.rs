//! Implements a SQLite backed expense store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    expense::{
        models::{
            CategoryTotal, Expense, ExpenseId, ExpenseUpdate, MonthRange, NewExpense, Summary,
            round_to_cents,
        },
        store::{ExpenseStore, RowsAffected},
    },
};

/// Stores expenses in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteExpenseStore {
    /// Create a new store for the SQLite `connection`.
    ///
    /// The expense table must already exist, see [crate::initialize_db].
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("Could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }

    fn query_expenses(
        connection: &Connection,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Expense>, Error> {
        let mut statement = connection.prepare(sql)?;
        let expenses = statement
            .query_map(params, Self::map_row)?
            .map(|maybe_expense| maybe_expense.map_err(Error::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(expenses)
    }
}

impl ExpenseStore for SQLiteExpenseStore {
    fn create(&self, expense: NewExpense) -> Result<Expense, Error> {
        let connection = self.lock()?;

        let expense = connection
            .prepare(
                "INSERT INTO expense (title, category, amount, date)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, title, category, amount, date",
            )?
            .query_row(
                (
                    expense.title(),
                    expense.category(),
                    expense.amount(),
                    expense.date(),
                ),
                Self::map_row,
            )?;

        tracing::debug!("Created expense {}", expense.id);

        Ok(expense)
    }

    fn get(&self, id: ExpenseId) -> Result<Expense, Error> {
        let connection = self.lock()?;

        let expense = connection
            .prepare("SELECT id, title, category, amount, date FROM expense WHERE id = :id")?
            .query_row(&[(":id", &id)], Self::map_row)?;

        Ok(expense)
    }

    fn get_all(&self) -> Result<Vec<Expense>, Error> {
        let connection = self.lock()?;

        Self::query_expenses(
            &connection,
            "SELECT id, title, category, amount, date FROM expense
             ORDER BY date DESC, id DESC",
            [],
        )
    }

    fn get_by_month(&self, month: &MonthRange) -> Result<Vec<Expense>, Error> {
        let connection = self.lock()?;

        Self::query_expenses(
            &connection,
            "SELECT id, title, category, amount, date FROM expense
             WHERE date >= ?1 AND date < ?2
             ORDER BY date DESC, id DESC",
            (month.start(), month.end()),
        )
    }

    fn update(&self, id: ExpenseId, update: ExpenseUpdate) -> Result<Expense, Error> {
        let connection = self.lock()?;

        // Zero rows returned means there was no expense with `id`, which maps to Error::NotFound.
        let expense = connection
            .prepare(
                "UPDATE expense
                 SET title = ?1, category = ?2, amount = ?3
                 WHERE id = ?4
                 RETURNING id, title, category, amount, date",
            )?
            .query_row(
                (update.title(), update.category(), update.amount(), id),
                Self::map_row,
            )?;

        Ok(expense)
    }

    fn delete(&self, id: ExpenseId) -> Result<RowsAffected, Error> {
        let connection = self.lock()?;

        match connection.execute("DELETE FROM expense WHERE id = :id", &[(":id", &id)])? {
            0 => Err(Error::NotFound),
            rows_affected => Ok(rows_affected),
        }
    }

    fn delete_all(&self) -> Result<RowsAffected, Error> {
        let connection = self.lock()?;

        let rows_affected = connection.execute("DELETE FROM expense", [])?;
        tracing::debug!("Deleted {rows_affected} expenses");

        Ok(rows_affected)
    }

    fn summarize(&self) -> Result<Summary, Error> {
        let connection = self.lock()?;

        connection
            .query_row(
                "SELECT COALESCE(SUM(amount), 0.0), COALESCE(AVG(amount), 0.0), COUNT(id)
                 FROM expense",
                [],
                |row| {
                    Ok(Summary {
                        total: round_to_cents(row.get(0)?),
                        average: round_to_cents(row.get(1)?),
                        count: row.get(2)?,
                    })
                },
            )
            .map_err(Error::from)
    }

    fn summarize_by_category(&self) -> Result<Vec<CategoryTotal>, Error> {
        let connection = self.lock()?;

        let mut statement = connection.prepare(
            "SELECT category, SUM(amount) AS total, COUNT(id) FROM expense
             GROUP BY category
             ORDER BY total DESC, category ASC",
        )?;

        let totals = statement
            .query_map([], |row| {
                Ok(CategoryTotal {
                    category: row.get(0)?,
                    total: round_to_cents(row.get(1)?),
                    count: row.get(2)?,
                })
            })?
            .map(|maybe_total| maybe_total.map_err(Error::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(totals)
    }
}

impl CreateTable for SQLiteExpenseStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        // AUTOINCREMENT so IDs of deleted expenses are never handed out again.
        connection.execute(
            "CREATE TABLE IF NOT EXISTS expense (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL CHECK (title <> ''),
                category TEXT NOT NULL CHECK (category <> ''),
                amount REAL NOT NULL CHECK (amount > 0),
                date TEXT NOT NULL
            )",
            (),
        )?;

        connection.execute(
            "CREATE INDEX IF NOT EXISTS idx_expense_date ON expense(date)",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteExpenseStore {
    type ReturnType = Expense;

    fn map_row(row: &Row) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Expense {
            id: row.get(0)?,
            title: row.get(1)?,
            category: row.get(2)?,
            amount: row.get(3)?,
            date: row.get(4)?,
        })
    }
}
