//! Course persistence over a SQLite pool.
//!
//! The store is an explicitly passed handle: callers open it, run
//! `ensure_schema` once, and close it on shutdown. No global connection
//! state.

use crate::error::AppError;
use crate::filter::{CourseFilter, Predicate};
use crate::model::{Course, CourseUpdate, NewCourse};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

#[derive(Clone)]
pub struct CourseStore {
    pool: SqlitePool,
}

impl CourseStore {
    /// Open a store at `database_url` (e.g. `sqlite:courses.db`), creating
    /// the database file if missing.
    pub async fn open(database_url: &str) -> Result<Self, AppError> {
        let opts = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await?;
        Ok(CourseStore { pool })
    }

    /// Open an in-memory store. Pinned to one connection so every query sees
    /// the same database.
    pub async fn in_memory() -> Result<Self, AppError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        Ok(CourseStore { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Idempotent DDL, run at startup. AUTOINCREMENT keeps ids monotonic so
    /// a deleted id is never handed out again.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS courses (
                id   INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Connectivity probe for readiness checks.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    /// List courses matching the filter, in insertion order.
    pub async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, AppError> {
        let preds = filter.predicates();
        let mut sql = String::from("SELECT id, name FROM courses");
        if !preds.is_empty() {
            let clauses: Vec<String> = preds
                .iter()
                .map(|p| format!("{} = ?", p.column()))
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id");
        tracing::debug!(sql = %sql, "query");
        let mut query = sqlx::query_as::<_, Course>(&sql);
        for p in &preds {
            query = match p {
                Predicate::IdEq(id) => query.bind(*id),
                Predicate::NameEq(name) => query.bind(name.clone()),
            };
        }
        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Fetch one course by id.
    pub async fn get(&self, id: i64) -> Result<Option<Course>, AppError> {
        tracing::debug!(id, "get course");
        let row = sqlx::query_as::<_, Course>("SELECT id, name FROM courses WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Insert a course; the store assigns the id. Returns the created row.
    pub async fn create(&self, new: &NewCourse) -> Result<Course, AppError> {
        tracing::debug!(name = %new.name, "create course");
        let row = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (name) VALUES (?) RETURNING id, name",
        )
        .bind(&new.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update as an explicit merge: read the current row, overwrite
    /// only the fields present in the patch, write back. Returns None if the
    /// id does not exist.
    pub async fn update(&self, id: i64, patch: &CourseUpdate) -> Result<Option<Course>, AppError> {
        tracing::debug!(id, "update course");
        let mut tx = self.pool.begin().await?;
        let existing = sqlx::query_as::<_, Course>("SELECT id, name FROM courses WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(existing) = existing else {
            return Ok(None);
        };
        let merged = Course {
            id: existing.id,
            name: patch.name.clone().unwrap_or(existing.name),
        };
        sqlx::query("UPDATE courses SET name = ? WHERE id = ?")
            .bind(&merged.name)
            .bind(merged.id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(merged))
    }

    /// Delete by id. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "delete course");
        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
