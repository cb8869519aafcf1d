//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Backing store locations.
    pub stores: StoresConfig,

    /// Notification delivery configuration.
    pub notify: NotifyConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Locations of the JSON documents backing the stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoresConfig {
    /// Calendar store document.
    pub calendar_path: PathBuf,

    /// Contact store document.
    pub contacts_path: PathBuf,
}

/// Configuration for desktop notification delivery.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// External helper to run instead of the platform default.
    /// The helper receives title, body, and optionally subtitle as arguments.
    pub command: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "organizer-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            stores: StoresConfig {
                calendar_path: PathBuf::from("data/calendar.json"),
                contacts_path: PathBuf::from("data/contacts.json"),
            },
            notify: NotifyConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_DATA_DIR`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // MCP_DATA_DIR moves both store documents; the per-store
        // variables below override individual files.
        if let Ok(data_dir) = std::env::var("MCP_DATA_DIR") {
            let data_dir = PathBuf::from(data_dir);
            config.stores.calendar_path = data_dir.join("calendar.json");
            config.stores.contacts_path = data_dir.join("contacts.json");
            info!("Store documents rooted at {}", data_dir.display());
        }

        if let Ok(path) = std::env::var("MCP_CALENDAR_FILE") {
            config.stores.calendar_path = PathBuf::from(path);
        }

        if let Ok(path) = std::env::var("MCP_CONTACTS_FILE") {
            config.stores.contacts_path = PathBuf::from(path);
        }

        if let Ok(command) = std::env::var("MCP_NOTIFY_COMMAND") {
            info!("Notification helper override: {}", command);
            config.notify.command = Some(command);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
            std::env::remove_var("MCP_LOG_LEVEL");
            std::env::remove_var("MCP_DATA_DIR");
            std::env::remove_var("MCP_CALENDAR_FILE");
            std::env::remove_var("MCP_CONTACTS_FILE");
            std::env::remove_var("MCP_NOTIFY_COMMAND");
        }
    }

    #[test]
    fn test_default_store_paths() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        let config = Config::default();
        assert_eq!(config.stores.calendar_path, PathBuf::from("data/calendar.json"));
        assert_eq!(config.stores.contacts_path, PathBuf::from("data/contacts.json"));
        assert_eq!(config.logging.level, "info");
        assert!(config.notify.command.is_none());
    }

    #[test]
    fn test_data_dir_moves_both_stores() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_DATA_DIR", "/var/lib/organizer");
        }
        let config = Config::from_env();
        assert_eq!(
            config.stores.calendar_path,
            PathBuf::from("/var/lib/organizer/calendar.json")
        );
        assert_eq!(
            config.stores.contacts_path,
            PathBuf::from("/var/lib/organizer/contacts.json")
        );
        clear_env();
    }

    #[test]
    fn test_store_file_override_wins_over_data_dir() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_DATA_DIR", "/var/lib/organizer");
            std::env::set_var("MCP_CALENDAR_FILE", "/srv/shared/calendar.json");
        }
        let config = Config::from_env();
        assert_eq!(
            config.stores.calendar_path,
            PathBuf::from("/srv/shared/calendar.json")
        );
        assert_eq!(
            config.stores.contacts_path,
            PathBuf::from("/var/lib/organizer/contacts.json")
        );
        clear_env();
    }

    #[test]
    fn test_server_name_and_notify_command_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "organizer-test");
            std::env::set_var("MCP_NOTIFY_COMMAND", "/usr/local/bin/my-notify");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "organizer-test");
        assert_eq!(config.notify.command.as_deref(), Some("/usr/local/bin/my-notify"));
        clear_env();
    }
}
