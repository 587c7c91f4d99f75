//! Defines the core data models for expenses.

use serde::{Deserialize, Serialize};
use time::{Month, OffsetDateTime, UtcOffset, format_description::well_known::Iso8601};

use crate::{
    Error,
    expense::form::{ValidationError, validate_amount, validate_date, validate_text},
};

// ============================================================================
// MODELS
// ============================================================================

/// Alias for the integer type used for expense IDs in the database.
pub type ExpenseId = i64;

/// A single spending event.
///
/// To create a new expense, validate the fields with [NewExpense::new] and
/// pass the result to [ExpenseStore::create](crate::expense::ExpenseStore::create).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense, assigned by the store and never changed.
    pub id: ExpenseId,
    /// What the money was spent on, e.g. "Lunch".
    pub title: String,
    /// A free-form category, e.g. "Food".
    pub category: String,
    /// The amount of money spent. Always greater than zero.
    pub amount: f64,
    /// When the expense happened as an ISO-8601 string.
    pub date: String,
}

/// The validated fields for an expense that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    title: String,
    category: String,
    amount: f64,
    date: String,
}

impl NewExpense {
    /// Validate the fields of a new expense.
    ///
    /// `title` and `category` are trimmed. `date` must start with a
    /// `YYYY-MM-DD` calendar date and is stored as given.
    ///
    /// # Errors
    /// Returns a [ValidationError] if `title` or `category` are empty,
    /// `amount` is not a finite number greater than zero, or `date` is not an
    /// ISO-8601 date.
    pub fn new(
        title: &str,
        category: &str,
        amount: f64,
        date: &str,
    ) -> Result<Self, ValidationError> {
        let (title, category) = match (validate_text(title), validate_text(category)) {
            (Some(title), Some(category)) => (title, category),
            _ => return Err(ValidationError::MissingFields),
        };

        Ok(Self {
            title,
            category,
            amount: validate_amount(amount)?,
            date: validate_date(date)?,
        })
    }

    /// What the money was spent on.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The category of the expense.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The amount spent.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// When the expense happened.
    pub fn date(&self) -> &str {
        &self.date
    }
}

/// The validated replacement values for the mutable fields of an expense.
///
/// The ID and date of an expense cannot be changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseUpdate {
    title: String,
    category: String,
    amount: f64,
}

impl ExpenseUpdate {
    /// Validate the replacement fields for an expense.
    ///
    /// # Errors
    /// Returns a [ValidationError] if `title` or `category` are empty, or
    /// `amount` is not a finite number greater than zero.
    pub fn new(title: &str, category: &str, amount: f64) -> Result<Self, ValidationError> {
        let (title, category) = match (validate_text(title), validate_text(category)) {
            (Some(title), Some(category)) => (title, category),
            _ => return Err(ValidationError::MissingFields),
        };

        Ok(Self {
            title,
            category,
            amount: validate_amount(amount)?,
        })
    }

    /// The new title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The new category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The new amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// Aggregate statistics over all expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of all amounts, rounded to two decimal places.
    pub total: f64,
    /// The mean amount, rounded to two decimal places. Zero when there are no expenses.
    pub average: f64,
    /// The number of expenses.
    pub count: i64,
}

/// The total spent in a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// The category name.
    pub category: String,
    /// The sum of the amounts in the category, rounded to two decimal places.
    pub total: f64,
    /// The number of expenses in the category.
    pub count: i64,
}

/// Round `value` to two decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// DATES
// ============================================================================

const MAX_YEAR: i32 = 9999;

/// The half-open date range `[first of month, first of next month)`.
///
/// Bounds are `YYYY-MM-DD` strings so they compare correctly against the
/// ISO-8601 date strings stored with each expense.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthRange {
    start: String,
    end: String,
}

impl MonthRange {
    /// Create the range covering `month` (1-12) of `year`.
    ///
    /// December rolls over to January of the following year.
    /// Returns `None` if `month` is not in 1-12 or `year` is not in 0-9999.
    pub fn new(year: i32, month: u8) -> Option<Self> {
        if !(0..=MAX_YEAR).contains(&year) {
            return None;
        }

        let month = Month::try_from(month).ok()?;
        let start = format!("{year:04}-{:02}-01", u8::from(month));

        let end = match month {
            // "10000-01-01" would sort before "9999-12-..", so close the last
            // representable month with a bound that sorts after all of its days.
            Month::December if year == MAX_YEAR => format!("{year:04}-13-01"),
            Month::December => format!("{:04}-01-01", year + 1),
            month => format!("{year:04}-{:02}-01", u8::from(month.next())),
        };

        Some(Self { start, end })
    }

    /// The first day of the month (inclusive).
    pub fn start(&self) -> &str {
        &self.start
    }

    /// The first day of the following month (exclusive).
    pub fn end(&self) -> &str {
        &self.end
    }
}

/// The current date-time at `offset` as an ISO-8601 string.
///
/// # Errors
/// Returns an [Error::DateFormat] if the date-time cannot be formatted.
pub fn current_timestamp(offset: UtcOffset) -> Result<String, Error> {
    OffsetDateTime::now_utc()
        .to_offset(offset)
        .format(&Iso8601::DEFAULT)
        .map_err(|error| Error::DateFormat(error.to_string()))
}
