pub mod client;
pub mod health;
pub mod person;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /clients              list, create
/// /clients/{id}         get, update, delete
///
/// /projects             list (with client + team aggregation), create
/// /projects/{id}        get, update, delete
///
/// /people               list (by name), create
/// /people/{id}          get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", client::router())
        .nest("/projects", project::router())
        .nest("/people", person::router())
}
