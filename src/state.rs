//! Shared application state for all routes.

use crate::store::CourseStore;

#[derive(Clone)]
pub struct AppState {
    pub store: CourseStore,
}
