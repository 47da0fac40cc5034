/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. Handlers keep no state of their own between requests;
/// everything durable lives in the database behind `pool`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: crm_db::DbPool,
}
