//! Course CRUD handlers: list, retrieve, create, update, delete.

use crate::error::AppError;
use crate::filter::CourseFilter;
use crate::state::AppState;
use crate::validation;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

fn body_to_map(value: Value) -> Result<HashMap<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m.into_iter().collect()),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let filter = CourseFilter::from_params(&params)?;
    let courses = state.store.list(&filter).await?;
    Ok((StatusCode::OK, Json(courses)))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let course = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("course {}", id)))?;
    Ok((StatusCode::OK, Json(course)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = body_to_map(body)?;
    let new = validation::new_course_from_body(&body)?;
    let course = state.store.create(&new).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = body_to_map(body)?;
    let patch = validation::course_update_from_body(&body)?;
    let course = state
        .store
        .update(id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("course {}", id)))?;
    Ok((StatusCode::OK, Json(course)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(format!("course {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
