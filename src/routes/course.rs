//! Course CRUD routes plus the sample endpoint.
//!
//! Paths carry a trailing slash to match the public API surface
//! (`/courses/`, `/courses/3/`, `/sample/`).

use crate::handlers::course::{create, delete as delete_handler, list, retrieve, update};
use crate::handlers::sample::sample;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn course_routes(state: AppState) -> Router {
    Router::new()
        .route("/courses/", get(list).post(create))
        .route(
            "/courses/:id/",
            get(retrieve).patch(update).delete(delete_handler),
        )
        .route("/sample/", get(sample))
        .with_state(state)
}
