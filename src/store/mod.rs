//! Persistence seam for the task lifecycle engine.
//!
//! The engine talks to storage only through the [`TaskStore`] trait. There
//! is one production implementation ([`PgTaskStore`]) and one in-memory
//! implementation ([`InMemoryTaskStore`]) so the engine's tests run without
//! a real database.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryTaskStore;
pub use postgres::PgTaskStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Task, TaskFilter};

/// Storage operations the lifecycle engine depends on.
///
/// Each call is atomic on its own; no cross-call transactional guarantee is
/// made. Implementations must reject a title collision on `insert`/`update`
/// with [`crate::error::TodoError::DuplicateTask`] — the engine's pre-check
/// is only a fast path, the store is the authoritative guard.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// All tasks in the filtered set, ordered by `created_at` descending.
    async fn find_all(&self, filter: TaskFilter) -> Result<Vec<Task>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>>;

    /// Persist a new task exactly as given (the engine assigns id and
    /// timestamps).
    async fn insert(&self, task: Task) -> Result<Task>;

    /// Persist a mutated task, keyed by its id.
    async fn update(&self, task: Task) -> Result<Task>;

    /// Remove a task. A no-op when the id does not exist; the engine checks
    /// existence first.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Whether any task other than `exclude_id` holds exactly this title.
    async fn exists_by_title(&self, title: &str, exclude_id: Option<Uuid>) -> Result<bool>;

    /// Remove every completed task in one logical batch.
    async fn delete_all_completed(&self) -> Result<()>;

    /// Set every task's completion flag, bumping every `updated_at`
    /// regardless of prior value.
    async fn set_all_completed(&self, completed: bool) -> Result<()>;
}
