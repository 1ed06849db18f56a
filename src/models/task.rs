//! # Task Model
//!
//! The sole entity tracked by this system: a todo item with a unique title
//! and a two-state completion lifecycle.
//!
//! ## Database Schema
//!
//! Maps to the `todo_tasks` table:
//! - `id`: primary key (UUID, assigned by the engine at creation)
//! - `title`: unique across all tasks, case-sensitive exact match
//! - `is_completed`: completion flag (BOOLEAN)
//! - `created_at` / `updated_at`: TIMESTAMPTZ, engine-stamped
//!
//! The JSON wire form is camelCase (`isCompleted`, `createdAt`, `updatedAt`)
//! to match the frontend contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A todo item.
///
/// `id` and `created_at` are immutable after creation; every mutation
/// refreshes `updated_at`, so `updated_at >= created_at` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Filter keyword narrowing a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    /// Permissive parse: unrecognized or absent keywords behave as `All`,
    /// never an error. Keyword matching is case-insensitive.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("active") => TaskFilter::Active,
            Some("completed") => TaskFilter::Completed,
            _ => TaskFilter::All,
        }
    }

    /// Whether a task belongs to the filtered set.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.is_completed,
            TaskFilter::Completed => task.is_completed,
        }
    }
}
