//! # Task Lifecycle Engine
//!
//! The business-rule layer governing how a task moves through its lifecycle:
//! create, rename, complete/uncomplete, delete, and the two bulk operations.
//! Title uniqueness and the timestamp rules live here; everything else
//! (routing, persistence plumbing) is a thin collaborator.
//!
//! The engine holds no mutable state of its own — all state lives in the
//! injected [`TaskStore`]. Every failure is a typed [`TodoError`] surfaced
//! verbatim to the caller; there are no retries and no partial-state
//! recovery.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{Result, TodoError};
use crate::models::{Task, TaskFilter};
use crate::store::TaskStore;

pub struct TaskLifecycleEngine {
    store: Arc<dyn TaskStore>,
}

impl TaskLifecycleEngine {
    /// Build an engine around a store. Constructor injection only — the
    /// engine never reaches for ambient/global state.
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// List tasks in the filtered set, newest first. Read-only.
    pub async fn list_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        self.store.find_all(filter).await
    }

    /// Fetch a single task by id.
    pub async fn get_task(&self, id: Uuid) -> Result<Task> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(TodoError::TaskNotFound(id))
    }

    /// Create a task with a server-assigned id and timestamps.
    ///
    /// The duplicate pre-check gives a friendly fast-path error; the store's
    /// unique index remains the authoritative guard when concurrent creates
    /// race past the check. Both paths surface the same `DuplicateTask` kind.
    pub async fn create_task(&self, title: impl Into<String>) -> Result<Task> {
        let title = title.into();

        if self.store.exists_by_title(&title, None).await? {
            return Err(TodoError::DuplicateTask(title));
        }

        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            title,
            is_completed: false,
            created_at: now,
            updated_at: now,
        };

        let created = self.store.insert(task).await?;
        info!(task_id = %created.id, title = %created.title, "task created");
        Ok(created)
    }

    /// Rename a task.
    ///
    /// The uniqueness check excludes the task itself, so renaming a task to
    /// its own current title is an ordinary update that still refreshes
    /// `updated_at`.
    pub async fn update_task(&self, id: Uuid, new_title: impl Into<String>) -> Result<Task> {
        let new_title = new_title.into();
        let mut task = self.get_task(id).await?;

        if self.store.exists_by_title(&new_title, Some(id)).await? {
            return Err(TodoError::DuplicateTask(new_title));
        }

        task.title = new_title;
        task.updated_at = Utc::now();

        let updated = self.store.update(task).await?;
        info!(task_id = %updated.id, title = %updated.title, "task renamed");
        Ok(updated)
    }

    /// Flip a task's completion flag.
    pub async fn toggle_task(&self, id: Uuid) -> Result<Task> {
        let mut task = self.get_task(id).await?;

        task.is_completed = !task.is_completed;
        task.updated_at = Utc::now();

        let updated = self.store.update(task).await?;
        debug!(
            task_id = %updated.id,
            is_completed = updated.is_completed,
            "task toggled"
        );
        Ok(updated)
    }

    /// Delete a task permanently.
    ///
    /// Existence is checked first so "nothing to delete" surfaces as
    /// `TaskNotFound` instead of a silent no-op.
    pub async fn delete_task(&self, id: Uuid) -> Result<()> {
        self.get_task(id).await?;
        self.store.delete(id).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Remove every completed task in one logical batch. Succeeds vacuously
    /// when none match.
    pub async fn delete_completed_tasks(&self) -> Result<()> {
        self.store.delete_all_completed().await?;
        info!("completed tasks deleted");
        Ok(())
    }

    /// Set every task's completion flag to `completed`.
    ///
    /// Every row's `updated_at` is bumped, including rows already at the
    /// target value. Intentional: the bulk path has always behaved this way.
    pub async fn toggle_all_tasks(&self, completed: bool) -> Result<()> {
        self.store.set_all_completed(completed).await?;
        info!(completed, "all tasks toggled");
        Ok(())
    }
}
