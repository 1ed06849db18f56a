use crate::error::{Result, TodoError};

/// Runtime configuration for the todo service.
#[derive(Debug, Clone)]
pub struct TodoConfig {
    pub database_url: String,
    pub bind_address: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            database_url: "postgresql://localhost/todo_development".to_string(),
            bind_address: "0.0.0.0:5000".to_string(),
            max_connections: 10,
            acquire_timeout_seconds: 30,
        }
    }
}

impl TodoConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(db_url) = std::env::var("DATABASE_URL") {
            config.database_url = db_url;
        }

        if let Ok(bind_address) = std::env::var("TODO_BIND_ADDRESS") {
            config.bind_address = bind_address;
        }

        if let Ok(max_connections) = std::env::var("TODO_DB_MAX_CONNECTIONS") {
            config.max_connections = max_connections.parse().map_err(|e| {
                TodoError::Configuration(format!("Invalid max_connections: {e}"))
            })?;
        }

        if let Ok(acquire_timeout) = std::env::var("TODO_DB_ACQUIRE_TIMEOUT_SECONDS") {
            config.acquire_timeout_seconds = acquire_timeout.parse().map_err(|e| {
                TodoError::Configuration(format!("Invalid acquire_timeout_seconds: {e}"))
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = TodoConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0:5000");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout_seconds, 30);
    }

    #[test]
    fn invalid_pool_size_is_a_configuration_error() {
        std::env::set_var("TODO_DB_MAX_CONNECTIONS", "not-a-number");
        let result = TodoConfig::from_env();
        std::env::remove_var("TODO_DB_MAX_CONNECTIONS");

        assert!(matches!(result, Err(TodoError::Configuration(_))));
    }
}
