//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DinoparkError, DinoparkResult};

use super::types::Config;

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "dinopark.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown or problematic key (or environment variable)
    pub key: String,
    /// Config file path, or `environment`
    pub origin: String,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    pub message: String,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.origin)?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DinoparkResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DinoparkError::InvalidConfig {
        origin: path.display().to_string(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                origin: path.display().to_string(),
                line: find_line_number(&content, &key),
                message: format!("unknown key '{}'", path_str),
                suggestion: suggest_key(&key),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration for a run:
/// 1. explicit `--config` path (must exist)
/// 2. `./dinopark.toml`
/// 3. user config (`<config dir>/dinopark/config.toml`)
/// 4. built-in defaults
///
/// Environment overrides (DINOPARK_*) are applied on top, then the result
/// is validated.
pub fn resolve(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> DinoparkResult<(Config, Vec<ConfigWarning>)> {
    let source = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover(working_dir),
    };

    let (config, mut warnings, origin) = match source {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            (config, warnings, path.display().to_string())
        }
        None => (Config::default(), Vec::new(), "defaults".to_string()),
    };

    let (config, env_warnings) = config.with_env_overrides();
    warnings.extend(env_warnings);

    config.validate(&origin)?;
    Ok((config, warnings))
}

fn discover(working_dir: &Path) -> Option<PathBuf> {
    let project_config = working_dir.join(PROJECT_CONFIG_FILE);
    if project_config.exists() {
        return Some(project_config);
    }

    let user_config = dirs::config_dir()?.join("dinopark/config.toml");
    user_config.exists().then_some(user_config)
}

/// Apply environment variable overrides (DINOPARK_* prefix).
///
/// Values that cannot be used are skipped and reported as warnings.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> (Config, Vec<ConfigWarning>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    // DINOPARK_STORE
    if let Some(path) = lookup("DINOPARK_STORE") {
        if !path.trim().is_empty() {
            config.storage.path = PathBuf::from(path);
        }
    }

    // DINOPARK_BASE_LENGTH
    if let Some(raw) = lookup("DINOPARK_BASE_LENGTH") {
        match raw.trim().parse::<i64>() {
            Ok(length) => config.builder.base_length = length,
            Err(_) => warnings.push(env_warning(
                "DINOPARK_BASE_LENGTH",
                format!("ignored non-integer value '{}'", raw),
            )),
        }
    }

    // DINOPARK_SECURITY_NAMES (comma-separated)
    if let Some(raw) = lookup("DINOPARK_SECURITY_NAMES") {
        let names: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if names.is_empty() {
            warnings.push(env_warning(
                "DINOPARK_SECURITY_NAMES",
                "ignored empty security name list".to_string(),
            ));
        } else {
            config.builder.security_names = names;
        }
    }

    // DINOPARK_LOG
    if let Some(filter) = lookup("DINOPARK_LOG") {
        if !filter.trim().is_empty() {
            config.logging.filter = filter;
        }
    }

    (config, warnings)
}

fn env_warning(key: &str, message: String) -> ConfigWarning {
    ConfigWarning {
        key: key.to_string(),
        origin: "environment".to_string(),
        line: None,
        message,
        suggestion: None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "builder",
        "security_names",
        "base_length",
        "storage",
        "path",
        "logging",
        "filter",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
