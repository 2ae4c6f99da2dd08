pub mod common;
pub mod course;

pub use common::common_routes_with_ready;
pub use course::course_routes;
