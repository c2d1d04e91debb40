//! Configuration module for dinopark
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DINOPARK_*)
//! 3. Explicit `--config` file, else `./dinopark.toml`, else the user config
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    BuilderConfig, Config, LoggingConfig, StorageConfig, DEFAULT_BASE_LENGTH,
    DEFAULT_SECURITY_NAMES, DEFAULT_STORE_PATH,
};
