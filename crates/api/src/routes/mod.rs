pub mod health;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /students                 list (GET), create (POST)
/// /students/search          keyword search (GET)
/// /students/sorted          sorted listing (GET)
/// /students/filter          filter by major (GET)
/// /students/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/students", student::router())
}
