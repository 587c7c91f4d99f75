//! Application router configuration for the JSON API and the static web client.

use axum::{
    Router,
    http::Uri,
    middleware,
    routing::{any, get},
};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::{
    AppState, Error, endpoints, logging_middleware,
    expense::{
        ExpenseStore, create_expense_endpoint, delete_all_expenses_endpoint,
        delete_expense_endpoint, edit_expense_endpoint, get_category_summary_endpoint,
        get_expense_endpoint, get_expenses_by_month_endpoint, get_summary_endpoint,
        list_expenses_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Paths that do not match an API route are served from the static directory
/// in `state`, with `/` serving `index.html`. Only API requests go through
/// [logging_middleware]; static files are served untouched.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: ExpenseStore + Clone + Send + Sync + 'static,
{
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route(
            endpoints::EXPENSES,
            get(list_expenses_endpoint::<S>)
                .post(create_expense_endpoint::<S>)
                .delete(delete_all_expenses_endpoint::<S>),
        )
        .route(
            endpoints::EXPENSE,
            get(get_expense_endpoint::<S>)
                .put(edit_expense_endpoint::<S>)
                .delete(delete_expense_endpoint::<S>),
        )
        .route(
            endpoints::EXPENSES_BY_MONTH,
            get(get_expenses_by_month_endpoint::<S>),
        )
        .route(endpoints::SUMMARY, get(get_summary_endpoint::<S>))
        .route(
            endpoints::CATEGORY_SUMMARY,
            get(get_category_summary_endpoint::<S>),
        )
        .route(&format!("{}/{{*path}}", endpoints::API), any(get_api_not_found))
        .route_layer(middleware::from_fn(logging_middleware))
        .fallback_service(static_files)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Unknown API routes get a JSON 404 instead of falling through to the static files.
async fn get_api_not_found(uri: Uri) -> Error {
    Error::RouteNotFound(uri.path().to_owned())
}
