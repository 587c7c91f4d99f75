//! The request body schema for creating and updating expenses and the
//! validation rules shared by both.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::{Date, macros::format_description};

use crate::expense::models::{ExpenseUpdate, NewExpense};

/// The reasons an expense in a request body can be rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The body did not contain any fields.
    #[error("No data provided")]
    NoData,

    /// One of title, category or amount was missing or empty.
    #[error("Missing required fields: title, category, amount")]
    MissingFields,

    /// The amount could not be parsed as a finite number.
    #[error("Amount must be a valid number")]
    InvalidAmount,

    /// The amount was zero or negative.
    #[error("Amount must be a positive number")]
    NonPositiveAmount,

    /// The date did not start with a `YYYY-MM-DD` calendar date.
    #[error("Date must be an ISO-8601 timestamp, got \"{0}\"")]
    InvalidDate(String),
}

/// An amount as sent by a client, either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// A JSON number, e.g. `250.0`.
    Number(f64),
    /// A string holding a number, e.g. `"250.0"`.
    Text(String),
}

impl AmountInput {
    /// Parse the amount, rejecting non-numeric text and non-positive values.
    ///
    /// # Errors
    /// Returns [ValidationError::InvalidAmount] if the amount is not a finite
    /// number, or [ValidationError::NonPositiveAmount] if it is not greater
    /// than zero.
    pub fn parse(&self) -> Result<f64, ValidationError> {
        let amount = match self {
            AmountInput::Number(amount) => *amount,
            AmountInput::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| ValidationError::InvalidAmount)?,
        };

        validate_amount(amount)
    }
}

/// The JSON body for creating or updating an expense.
///
/// All fields are optional at the schema level so that missing fields are
/// reported with a validation message rather than a parse error.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ExpenseForm {
    /// What the money was spent on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The category of the expense.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// The amount spent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<AmountInput>,
    /// When the expense happened. Only used when creating an expense.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Set when the body was `{}`, as opposed to an object whose fields are
    /// all unknown or null.
    #[serde(skip)]
    pub(crate) is_empty_object: bool,
}

#[derive(Deserialize)]
struct FormFields {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    amount: Option<AmountInput>,
    #[serde(default)]
    date: Option<String>,
}

impl TryFrom<Map<String, Value>> for ExpenseForm {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let is_empty_object = object.is_empty();
        let fields: FormFields = serde_json::from_value(Value::Object(object))?;

        Ok(Self {
            title: fields.title,
            category: fields.category,
            amount: fields.amount,
            date: fields.date,
            is_empty_object,
        })
    }
}

impl ExpenseForm {
    /// Validate the form for creating an expense.
    ///
    /// If the form has no date, `default_date` is used instead.
    ///
    /// # Errors
    /// Returns a [ValidationError] describing the first rule the form breaks.
    /// Title and category are checked before the amount, and the amount
    /// before the date.
    pub fn into_new_expense(self, default_date: &str) -> Result<NewExpense, ValidationError> {
        let (title, category, amount) = self.required_fields()?;
        let date = self.date.as_deref().unwrap_or(default_date);

        NewExpense::new(&title, &category, amount, date)
    }

    /// Validate the form for updating an expense. Any date in the form is ignored.
    ///
    /// # Errors
    /// Returns a [ValidationError] describing the first rule the form breaks.
    pub fn into_expense_update(self) -> Result<ExpenseUpdate, ValidationError> {
        let (title, category, amount) = self.required_fields()?;

        ExpenseUpdate::new(&title, &category, amount)
    }

    fn required_fields(&self) -> Result<(String, String, f64), ValidationError> {
        if self.is_empty_object {
            return Err(ValidationError::NoData);
        }

        let title = self.title.as_deref().and_then(validate_text);
        let category = self.category.as_deref().and_then(validate_text);

        match (title, category, self.amount.as_ref()) {
            (Some(title), Some(category), Some(amount)) => Ok((title, category, amount.parse()?)),
            _ => Err(ValidationError::MissingFields),
        }
    }
}

/// Trim `text`, returning `None` if nothing is left.
pub(crate) fn validate_text(text: &str) -> Option<String> {
    let text = text.trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_owned())
    }
}

pub(crate) fn validate_amount(amount: f64) -> Result<f64, ValidationError> {
    if !amount.is_finite() {
        Err(ValidationError::InvalidAmount)
    } else if amount <= 0.0 {
        Err(ValidationError::NonPositiveAmount)
    } else {
        Ok(amount)
    }
}

/// Check that `date` starts with a `YYYY-MM-DD` calendar date, optionally
/// followed by a time separated by 'T' or a space.
pub(crate) fn validate_date(date: &str) -> Result<String, ValidationError> {
    let date = date.trim();
    let invalid = || ValidationError::InvalidDate(date.to_owned());

    let (calendar_date, rest) = match (date.get(..10), date.get(10..)) {
        (Some(calendar_date), Some(rest)) => (calendar_date, rest),
        _ => return Err(invalid()),
    };

    Date::parse(calendar_date, format_description!("[year]-[month]-[day]"))
        .map_err(|_| invalid())?;

    if !rest.is_empty() && !rest.starts_with(['T', ' ']) {
        return Err(invalid());
    }

    Ok(date.to_owned())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{AmountInput, ExpenseForm, ValidationError, validate_date};

    fn parse_form(value: serde_json::Value) -> ExpenseForm {
        serde_json::from_value(value).expect("could not parse form")
    }

    #[test]
    fn amount_accepts_numbers_and_numeric_strings() {
        let form = parse_form(json!({"title": "a", "category": "b", "amount": 250}));
        assert_eq!(form.amount, Some(AmountInput::Number(250.0)));

        let form = parse_form(json!({"title": "a", "category": "b", "amount": "12.5"}));
        assert_eq!(form.amount.unwrap().parse(), Ok(12.5));
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let form = parse_form(json!({"title": "a", "category": "b", "amount": "abc"}));

        assert_eq!(
            form.into_new_expense("2026-02-01"),
            Err(ValidationError::InvalidAmount)
        );
    }

    #[test]
    fn rejects_nan_amount() {
        assert_eq!(
            AmountInput::Text("NaN".to_owned()).parse(),
            Err(ValidationError::InvalidAmount)
        );
    }

    #[test]
    fn rejects_negative_amount() {
        let form = parse_form(json!({"title": "a", "category": "b", "amount": -5}));

        assert_eq!(
            form.into_new_expense("2026-02-01"),
            Err(ValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn empty_form_has_no_data() {
        let form = parse_form(json!({}));

        assert_eq!(form.into_expense_update(), Err(ValidationError::NoData));
    }

    #[test]
    fn object_without_known_fields_is_missing_fields() {
        for value in [json!({"foo": 1}), json!({"title": null})] {
            let form = parse_form(value);

            assert_eq!(
                form.into_new_expense("2026-02-01"),
                Err(ValidationError::MissingFields)
            );
        }
    }

    #[test]
    fn missing_fields_are_reported_before_invalid_amount() {
        let form = parse_form(json!({"title": "", "category": "Food", "amount": "abc"}));

        assert_eq!(
            form.into_new_expense("2026-02-01"),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn zero_amount_is_not_missing() {
        let form = parse_form(json!({"title": "a", "category": "b", "amount": 0}));

        assert_eq!(
            form.into_expense_update(),
            Err(ValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn non_object_body_is_a_parse_error() {
        assert!(serde_json::from_value::<ExpenseForm>(json!([1, 2])).is_err());
        assert!(serde_json::from_value::<ExpenseForm>(json!({"amount": true})).is_err());
    }

    #[test]
    fn missing_field_is_reported() {
        let form = parse_form(json!({"title": "Lunch", "amount": 5}));

        assert_eq!(
            form.into_new_expense("2026-02-01"),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn empty_category_counts_as_missing() {
        let form = parse_form(json!({"title": "Lunch", "category": "", "amount": 5}));

        assert_eq!(
            form.into_new_expense("2026-02-01"),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn uses_default_date_when_absent() {
        let form = parse_form(json!({"title": "Lunch", "category": "Food", "amount": 5}));

        let expense = form.into_new_expense("2026-02-01T12:00:00Z").unwrap();

        assert_eq!(expense.date(), "2026-02-01T12:00:00Z");
    }

    #[test]
    fn keeps_supplied_date() {
        let form = parse_form(json!({
            "title": "Lunch",
            "category": "Food",
            "amount": 5,
            "date": "2025-12-31T23:59:59.000Z"
        }));

        let expense = form.into_new_expense("2026-02-01").unwrap();

        assert_eq!(expense.date(), "2025-12-31T23:59:59.000Z");
    }

    #[test]
    fn validates_dates() {
        assert!(validate_date("2026-02-01").is_ok());
        assert!(validate_date("2026-02-01T12:00:00.000Z").is_ok());
        assert!(validate_date("2026-02-01 12:00:00").is_ok());

        assert!(validate_date("yesterday").is_err());
        assert!(validate_date("2026-02-30").is_err());
        assert!(validate_date("2026-02-011").is_err());
        assert!(validate_date("").is_err());
    }
}
