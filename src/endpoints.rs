//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/expenses/{expense_id}', use [format_endpoint].

/// The root route which serves the web client.
pub const ROOT: &str = "/";
/// The route to list, create and delete all expenses.
pub const EXPENSES: &str = "/api/expenses";
/// The route to get, update or delete a single expense.
pub const EXPENSE: &str = "/api/expenses/{expense_id}";
/// The route to list the expenses in a calendar month.
pub const EXPENSES_BY_MONTH: &str = "/api/expenses/month/{year}/{month}";
/// The route for the total, average and count of all expenses.
pub const SUMMARY: &str = "/api/summary";
/// The route for expense totals grouped by category.
pub const CATEGORY_SUMMARY: &str = "/api/summary/categories";
/// The prefix shared by all API routes.
pub const API: &str = "/api";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/expenses/{expense_id}', '{expense_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and replaces the first parameter only.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

/// Fill in the year and month parameters of [EXPENSES_BY_MONTH].
pub fn format_month_endpoint(year: i32, month: u8) -> String {
    EXPENSES_BY_MONTH
        .replace("{year}", &year.to_string())
        .replace("{month}", &month.to_string())
}
