//! # Todo Core
//!
//! Task lifecycle engine and REST API for a minimal todo application.
//!
//! ## Overview
//!
//! The heart of the crate is the [`engine::TaskLifecycleEngine`]: the
//! business-rule layer governing how a task transitions between states
//! (create, rename, complete/uncomplete, delete, bulk delete, bulk toggle)
//! while enforcing title uniqueness and timestamp rules. The engine depends
//! on a [`store::TaskStore`] collaborator for persistence — one PostgreSQL
//! implementation for production and one in-memory implementation for tests
//! and local development.
//!
//! ## Module Organization
//!
//! - [`engine`] - task lifecycle and validation engine (the core)
//! - [`store`] - persistence seam: `TaskStore` trait + implementations
//! - [`models`] - the `Task` entity and list filters
//! - [`validation`] - title validation collaborator
//! - [`web`] - axum HTTP surface
//! - [`config`] - environment-driven configuration
//! - [`error`] - structured error handling
//! - [`logging`] - tracing initialization

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
pub mod validation;
pub mod web;

pub use config::TodoConfig;
pub use engine::TaskLifecycleEngine;
pub use error::{FieldError, Result, TodoError};
pub use models::{Task, TaskFilter};
pub use store::{InMemoryTaskStore, PgTaskStore, TaskStore};
