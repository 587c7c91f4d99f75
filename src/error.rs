//! Defines the app level error type and its conversion to JSON error responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::expense::ValidationError;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The expense in the request body failed validation.
    ///
    /// The store is never touched when this error is returned.
    #[error(transparent)]
    InvalidExpense(#[from] ValidationError),

    /// The request body was missing or could not be parsed as an expense.
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    /// A path parameter, e.g. an expense ID, could not be parsed.
    #[error("Invalid path parameter: {0}")]
    InvalidPathParameter(String),

    /// The requested expense was not found.
    ///
    /// Internally, this error may occur when a query returns no rows or an
    /// update/delete affected zero rows.
    #[error("Expense not found")]
    NotFound,

    /// No API route matches the request path.
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// An unhandled/unexpected SQL error.
    ///
    /// The message of the underlying error is passed through to the client.
    #[error("{0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// The current date-time could not be formatted as an ISO-8601 string.
    #[error("could not format the current date-time: {0}")]
    DateFormat(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequestBody(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::InvalidPathParameter(rejection.body_text())
    }
}

impl Error {
    /// The HTTP status code the error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidExpense(_)
            | Error::InvalidRequestBody(_)
            | Error::InvalidPathParameter(_) => StatusCode::BAD_REQUEST,
            Error::NotFound | Error::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Error::SqlError(_)
            | Error::DatabaseLockError
            | Error::InvalidTimezone(_)
            | Error::DateFormat(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("An unexpected error occurred: {}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{Error, expense::ValidationError};

    async fn response_json(error: Error) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");

        (
            status,
            serde_json::from_slice(&body).expect("Could not parse response body as JSON"),
        )
    }

    #[tokio::test]
    async fn validation_error_is_bad_request() {
        let (status, body) =
            response_json(Error::InvalidExpense(ValidationError::NonPositiveAmount)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Amount must be a positive number");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let (status, body) = response_json(Error::NotFound).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Expense not found");
    }

    #[tokio::test]
    async fn unknown_route_is_404_with_path() {
        let (status, body) = response_json(Error::RouteNotFound("/api/nope".to_owned())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Route not found: /api/nope");
    }

    #[tokio::test]
    async fn sql_error_passes_message_through() {
        let sql_error = rusqlite::Error::InvalidColumnName("foo".to_owned());
        let want_message = sql_error.to_string();

        let (status, body) = response_json(Error::SqlError(sql_error)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], want_message);
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        assert_eq!(
            Error::from(rusqlite::Error::QueryReturnedNoRows),
            Error::NotFound
        );
    }
}
