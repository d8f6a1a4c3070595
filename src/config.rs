//! Configuration for the clinic tool
//!
//! Resolution order for the data directory:
//! 1. `--data-dir` CLI flag (highest priority)
//! 2. `DENTAL_DATA_DIR` environment variable
//! 3. Project config (`./dental.toml`)
//! 4. User config (`~/.config/dental/dental.toml`)
//! 5. Built-in default (`data`, relative to the working directory)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ClinicError, ClinicResult};

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ClinicResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ClinicResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path).map_err(|e| ClinicError::Config {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| ClinicError::Config {
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

    /// Load from project config, user config, or defaults
    ///
    /// A present-but-broken config file is an error; a missing one is not.
    pub fn load_or_default(project_root: Option<&Path>) -> ClinicResult<(Self, Vec<ConfigWarning>)> {
        if let Some(path) = Self::locate(project_root) {
            let (config, warnings) = Self::load_with_warnings(&path)?;
            return Ok((config.with_env_overrides(), warnings));
        }
        Ok((Self::default().with_env_overrides(), Vec::new()))
    }

    /// First existing config file in the resolution chain
    fn locate(project_root: Option<&Path>) -> Option<PathBuf> {
        if let Some(root) = project_root {
            let project_config = root.join("dental.toml");
            if project_config.exists() {
                return Some(project_config);
            }
        }

        if let Some(user_config_dir) = dirs_config_dir() {
            let user_config = user_config_dir.join("dental/dental.toml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        None
    }

    /// Apply environment variable overrides (DENTAL_* prefix)
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(dir) = std::env::var("DENTAL_DATA_DIR") {
            if !dir.is_empty() {
                self.storage.data_dir = PathBuf::from(dir);
            }
        }

        self
    }

    /// Final data directory after applying an explicit CLI flag
    pub fn data_dir(&self, flag: Option<&Path>) -> PathBuf {
        match flag {
            Some(dir) => dir.to_path_buf(),
            None => self.storage.data_dir.clone(),
        }
    }
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["storage", "data_dir"];

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
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = std::cmp::min(
                std::cmp::min(prev[j + 1] + 1, curr[j] + 1),
                prev[j] + cost,
            );
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
