//! Shared application state for the web API.

use std::sync::Arc;

use crate::engine::TaskLifecycleEngine;

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<TaskLifecycleEngine>,
}

impl AppState {
    pub fn new(engine: Arc<TaskLifecycleEngine>) -> Self {
        Self { engine }
    }
}
