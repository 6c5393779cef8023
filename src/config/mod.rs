/// Configuration management for the liftlog service
///
/// Handles server binding and database connection settings.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// Database configuration for the workout store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL (default: "sqlite://gym.db")
    /// "sqlite::memory:" gives a throwaway store pinned to one connection
    pub url: String,
    /// Upper bound on pooled connections for file-backed databases
    pub max_connections: u32,
    /// How long a connection waits on a locked database before failing
    pub busy_timeout_ms: u64,
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("LIFTLOG_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("LIFTLOG_PORT")
                    .unwrap_or_else(|_| "5001".to_string())
                    .parse()
                    .unwrap_or(5001),
            },
            database: DatabaseConfig {
                url: std::env::var("LIFTLOG_DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite://gym.db".to_string()),
                max_connections: std::env::var("LIFTLOG_DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .filter(|n| *n > 0)
                    .unwrap_or(5),
                busy_timeout_ms: std::env::var("LIFTLOG_DB_BUSY_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5000),
            },
        }
    }
}

impl Config {
    /// Address string handed to the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
