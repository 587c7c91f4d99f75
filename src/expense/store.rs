//! Defines the expense store trait.

use crate::{
    Error,
    expense::models::{
        CategoryTotal, Expense, ExpenseId, ExpenseUpdate, MonthRange, NewExpense, Summary,
    },
};

/// The number of rows changed by a statement.
pub type RowsAffected = usize;

/// Handles the creation, retrieval, modification and deletion of expenses.
///
/// Lists of expenses are ordered by date, most recent first. Expenses with the
/// same date are ordered by ID, most recently created first.
pub trait ExpenseStore {
    /// Store a new expense and return it with its assigned ID.
    fn create(&self, expense: NewExpense) -> Result<Expense, Error>;

    /// Retrieve the expense with `id`.
    ///
    /// Returns [Error::NotFound] if there is no such expense.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error>;

    /// Retrieve all expenses.
    fn get_all(&self) -> Result<Vec<Expense>, Error>;

    /// Retrieve the expenses dated within `month`.
    fn get_by_month(&self, month: &MonthRange) -> Result<Vec<Expense>, Error>;

    /// Replace the title, category and amount of the expense with `id`.
    ///
    /// The ID and date are left unchanged. Returns [Error::NotFound] if there
    /// is no such expense.
    fn update(&self, id: ExpenseId, update: ExpenseUpdate) -> Result<Expense, Error>;

    /// Delete the expense with `id`.
    ///
    /// Returns [Error::NotFound] if there is no such expense.
    fn delete(&self, id: ExpenseId) -> Result<RowsAffected, Error>;

    /// Delete every expense and return how many were deleted.
    fn delete_all(&self) -> Result<RowsAffected, Error>;

    /// Get the total, average and count of all expenses.
    fn summarize(&self) -> Result<Summary, Error>;

    /// Get the total and count of expenses per category, largest total first.
    fn summarize_by_category(&self) -> Result<Vec<CategoryTotal>, Error>;
}
