//! Request body validation producing typed records.

use crate::error::AppError;
use crate::model::{CourseUpdate, NewCourse};
use serde_json::Value;
use std::collections::HashMap;

/// Validate a create body. `name` is required and must be a non-empty string.
pub fn new_course_from_body(body: &HashMap<String, Value>) -> Result<NewCourse, AppError> {
    match body.get("name") {
        None | Some(Value::Null) => Err(AppError::Validation("name is required".into())),
        Some(v) => Ok(NewCourse {
            name: name_from_value(v)?,
        }),
    }
}

/// Validate a patch body. Only fields present are checked; an absent field
/// keeps its stored value.
pub fn course_update_from_body(body: &HashMap<String, Value>) -> Result<CourseUpdate, AppError> {
    let mut update = CourseUpdate::default();
    if let Some(v) = body.get("name") {
        update.name = Some(name_from_value(v)?);
    }
    Ok(update)
}

fn name_from_value(v: &Value) -> Result<String, AppError> {
    let s = v
        .as_str()
        .ok_or_else(|| AppError::Validation("name must be a string".into()))?;
    if s.is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    Ok(s.to_string())
}
