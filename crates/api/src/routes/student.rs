//! Route definitions for the `/students` resource.
//!
//! The shaping routes (`/search`, `/sorted`, `/filter`) are static
//! segments and take precedence over the `/{id}` capture.

use axum::routing::get;
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/students`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(student::list).post(student::create))
        .route("/search", get(student::search))
        .route("/sorted", get(student::sorted))
        .route("/filter", get(student::filter_by_major))
        .route(
            "/{id}",
            get(student::get_by_id)
                .put(student::update)
                .delete(student::delete),
        )
}
