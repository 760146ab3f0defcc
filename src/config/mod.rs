//! Configuration module for petfriends
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PETFRIENDS_*)
//! 3. Project config (./petfriends.toml)
//! 4. User config (~/.config/petfriends/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, LoggingConfig, StorageBackend, StorageConfig};
