//! Course catalog REST API: typed CRUD over a SQLite-backed store.

pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod state;
pub mod store;
pub mod validation;
pub mod handlers;
pub mod routes;

pub use config::ServerConfig;
pub use error::AppError;
pub use filter::CourseFilter;
pub use model::{Course, CourseUpdate, NewCourse};
pub use routes::{common_routes_with_ready, course_routes};
pub use state::AppState;
pub use store::CourseStore;
