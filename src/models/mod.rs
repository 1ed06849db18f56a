//! Data layer for the todo service.

pub mod task;

pub use task::{Task, TaskFilter};
