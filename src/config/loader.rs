//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PetsError, PetsResult};

use super::types::{Config, StorageBackend};

/// File name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "petfriends.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PetsResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PetsError::Config {
        file: path.to_path_buf(),
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
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults, then apply env overrides.
///
/// The first config file that exists wins; files are not merged.
pub fn load_or_default(project_root: Option<&Path>) -> PetsResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match find_config_file(project_root) {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };
    Ok((with_env_overrides(config)?, warnings))
}

pub(super) fn find_config_file(project_root: Option<&Path>) -> Option<PathBuf> {
    let project = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
    let user = user_config_dir().map(|dir| dir.join("petfriends").join("config.toml"));

    [project, user].into_iter().flatten().find(|p| p.is_file())
}

/// Apply environment variable overrides (PETFRIENDS_* prefix)
pub fn with_env_overrides(config: Config) -> PetsResult<Config> {
    apply_env_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides read through `lookup`, so callers can supply their own environment.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> PetsResult<Config>
where
    F: Fn(&str) -> Option<String>,
{
    // PETFRIENDS_BACKEND
    if let Some(value) = lookup("PETFRIENDS_BACKEND") {
        config.storage.backend =
            StorageBackend::parse(&value).ok_or_else(|| PetsError::InvalidEnv {
                variable: "PETFRIENDS_BACKEND".to_string(),
                value: value.clone(),
            })?;
    }

    // PETFRIENDS_DATA_PATH
    if let Some(value) = lookup("PETFRIENDS_DATA_PATH") {
        if !value.trim().is_empty() {
            config.storage.path = Some(PathBuf::from(value));
        }
    }

    // PETFRIENDS_LOG_LEVEL
    if let Some(value) = lookup("PETFRIENDS_LOG_LEVEL") {
        if !value.trim().is_empty() {
            config.logging.level = value.trim().to_lowercase();
        }
    }

    // PETFRIENDS_SEED
    if let Some(value) = lookup("PETFRIENDS_SEED") {
        config.storage.seed_on_empty = value.to_lowercase() != "false" && value != "0";
    }

    Ok(config)
}

/// XDG config directory, falling back to the platform default.
fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "backend",
        "path",
        "seed_on_empty",
        "logging",
        "level",
        "json",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
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
