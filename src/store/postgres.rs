//! PostgreSQL-backed task store.
//!
//! The `todo_tasks` table carries a unique index on `title`; SQLSTATE 23505
//! from an insert or update is surfaced as `DuplicateTask` so the store, not
//! the engine's pre-check, is the authoritative uniqueness guard under
//! concurrent writers.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use super::TaskStore;
use crate::error::{Result, TodoError};
use crate::models::{Task, TaskFilter};

const TASK_COLUMNS: &str = "id, title, is_completed, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn find_all(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        let predicate = match filter {
            TaskFilter::All => "",
            TaskFilter::Active => " WHERE is_completed = false",
            TaskFilter::Completed => " WHERE is_completed = true",
        };
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM todo_tasks{predicate} ORDER BY created_at DESC"
        );

        let tasks = sqlx::query_as::<_, Task>(&sql).fetch_all(&self.pool).await?;
        Ok(tasks)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            "SELECT id, title, is_completed, created_at, updated_at
             FROM todo_tasks
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    async fn insert(&self, task: Task) -> Result<Task> {
        let inserted = sqlx::query_as::<_, Task>(
            "INSERT INTO todo_tasks (id, title, is_completed, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, title, is_completed, created_at, updated_at",
        )
        .bind(task.id)
        .bind(&task.title)
        .bind(task.is_completed)
        .bind(task.created_at)
        .bind(task.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                TodoError::DuplicateTask(task.title.clone())
            } else {
                err.into()
            }
        })?;

        Ok(inserted)
    }

    async fn update(&self, task: Task) -> Result<Task> {
        let updated = sqlx::query_as::<_, Task>(
            "UPDATE todo_tasks
             SET title = $2, is_completed = $3, updated_at = $4
             WHERE id = $1
             RETURNING id, title, is_completed, created_at, updated_at",
        )
        .bind(task.id)
        .bind(&task.title)
        .bind(task.is_completed)
        .bind(task.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                TodoError::DuplicateTask(task.title.clone())
            } else {
                TodoError::from(err)
            }
        })?
        .ok_or(TodoError::TaskNotFound(task.id))?;

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM todo_tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(task_id = %id, rows = result.rows_affected(), "deleted task");
        Ok(())
    }

    async fn exists_by_title(&self, title: &str, exclude_id: Option<Uuid>) -> Result<bool> {
        let exists: bool = match exclude_id {
            Some(id) => {
                sqlx::query_scalar(
                    "SELECT EXISTS(SELECT 1 FROM todo_tasks WHERE title = $1 AND id <> $2)",
                )
                .bind(title)
                .bind(id)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM todo_tasks WHERE title = $1)")
                    .bind(title)
                    .fetch_one(&self.pool)
                    .await?
            }
        };

        Ok(exists)
    }

    async fn delete_all_completed(&self) -> Result<()> {
        let result = sqlx::query("DELETE FROM todo_tasks WHERE is_completed = true")
            .execute(&self.pool)
            .await?;

        debug!(rows = result.rows_affected(), "deleted completed tasks");
        Ok(())
    }

    async fn set_all_completed(&self, completed: bool) -> Result<()> {
        // Every row gets a fresh updated_at, including rows already at the
        // target value.
        let result = sqlx::query("UPDATE todo_tasks SET is_completed = $1, updated_at = NOW()")
            .bind(completed)
            .execute(&self.pool)
            .await?;

        debug!(
            completed,
            rows = result.rows_affected(),
            "set completion on all tasks"
        );
        Ok(())
    }
}
