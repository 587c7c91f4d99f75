//! Expenses: the data model, request validation, storage and route handlers.

mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod list_endpoint;
mod models;
mod sqlite;
mod store;
mod summary_endpoint;

pub use create_endpoint::{CreateExpenseState, create_expense_endpoint};
pub use delete_endpoint::{
    MessageResponse, delete_all_expenses_endpoint, delete_expense_endpoint,
};
pub use edit_endpoint::edit_expense_endpoint;
pub use form::{AmountInput, ExpenseForm, ValidationError};
pub use list_endpoint::{
    ExpenseState, get_expense_endpoint, get_expenses_by_month_endpoint, list_expenses_endpoint,
};
pub use models::{
    CategoryTotal, Expense, ExpenseId, ExpenseUpdate, MonthRange, NewExpense, Summary,
    current_timestamp, round_to_cents,
};
pub use sqlite::SQLiteExpenseStore;
pub use store::{ExpenseStore, RowsAffected};
pub use summary_endpoint::{get_category_summary_endpoint, get_summary_endpoint};
