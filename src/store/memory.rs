//! In-memory task store for engine tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use super::TaskStore;
use crate::error::{Result, TodoError};
use crate::models::{Task, TaskFilter};

/// A [`TaskStore`] backed by a `HashMap` behind a `RwLock`.
///
/// Enforces the same title-uniqueness backstop as the Postgres store so the
/// engine observes identical failure kinds from both implementations.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: RwLock<HashMap<Uuid, Task>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn find_all(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        let tasks = self.tasks.read();
        let mut matching: Vec<Task> = tasks
            .values()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>> {
        Ok(self.tasks.read().get(&id).cloned())
    }

    async fn insert(&self, task: Task) -> Result<Task> {
        let mut tasks = self.tasks.write();
        if tasks.values().any(|existing| existing.title == task.title) {
            return Err(TodoError::DuplicateTask(task.title));
        }
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn update(&self, task: Task) -> Result<Task> {
        let mut tasks = self.tasks.write();
        if !tasks.contains_key(&task.id) {
            return Err(TodoError::TaskNotFound(task.id));
        }
        if tasks
            .values()
            .any(|existing| existing.id != task.id && existing.title == task.title)
        {
            return Err(TodoError::DuplicateTask(task.title));
        }
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.tasks.write().remove(&id);
        Ok(())
    }

    async fn exists_by_title(&self, title: &str, exclude_id: Option<Uuid>) -> Result<bool> {
        Ok(self
            .tasks
            .read()
            .values()
            .any(|task| task.title == title && exclude_id != Some(task.id)))
    }

    async fn delete_all_completed(&self) -> Result<()> {
        self.tasks.write().retain(|_, task| !task.is_completed);
        Ok(())
    }

    async fn set_all_completed(&self, completed: bool) -> Result<()> {
        let now = Utc::now();
        for task in self.tasks.write().values_mut() {
            task.is_completed = completed;
            task.updated_at = now;
        }
        Ok(())
    }
}
