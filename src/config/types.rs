//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DinoparkError, DinoparkResult};

use super::loader::{self, ConfigWarning};

/// Security device names the builder draws from by default
pub const DEFAULT_SECURITY_NAMES: [&str; 4] =
    ["Fence", "Electric fence", "Guard tower", "Helpful Sign"];

/// Length of the first dinosaur grown by the builder
pub const DEFAULT_BASE_LENGTH: i64 = 5;

/// Store file used when nothing else is configured
pub const DEFAULT_STORE_PATH: &str = "dinopark-store.toml";

/// Enclosure builder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    #[serde(default = "default_security_names")]
    pub security_names: Vec<String>,

    #[serde(default = "default_base_length")]
    pub base_length: i64,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            security_names: default_security_names(),
            base_length: default_base_length(),
        }
    }
}

fn default_security_names() -> Vec<String> {
    DEFAULT_SECURITY_NAMES.iter().map(|s| s.to_string()).collect()
}

fn default_base_length() -> i64 {
    DEFAULT_BASE_LENGTH
}

/// Enclosure store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"warn"` or `"dinopark=debug"`
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub builder: BuilderConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DinoparkResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DinoparkResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the effective configuration for a run.
    ///
    /// See the module docs for the lookup order.
    pub fn resolve(
        explicit: Option<&Path>,
        working_dir: &Path,
    ) -> DinoparkResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit, working_dir)
    }

    /// Apply environment variable overrides (DINOPARK_* prefix)
    pub fn with_env_overrides(self) -> (Self, Vec<ConfigWarning>) {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Reject configurations the builder cannot work with
    pub fn validate(&self, origin: &str) -> DinoparkResult<()> {
        if self.builder.security_names.is_empty() {
            return Err(DinoparkError::InvalidConfig {
                origin: origin.to_string(),
                message: "builder.security_names must not be empty".to_string(),
            });
        }

        if self.builder.security_names.iter().any(|n| n.trim().is_empty()) {
            return Err(DinoparkError::InvalidConfig {
                origin: origin.to_string(),
                message: "builder.security_names must not contain blank names".to_string(),
            });
        }

        Ok(())
    }
}
