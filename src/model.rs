//! Course records as stored and as exchanged over the API.

use serde::{Deserialize, Serialize};

/// A persisted course. `id` is assigned by the store at creation and never
/// changes or gets reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Course {
    pub id: i64,
    pub name: String,
}

/// Fields required to create a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
}

/// Partial update: only fields present in the request body are set; absent
/// fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseUpdate {
    pub name: Option<String>,
}
