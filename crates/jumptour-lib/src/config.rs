//! Persisted planner settings.
//!
//! Settings live in a small JSON file so repeated runs reuse the last jump
//! range, dataset file and route shape. Older files stored the booleans as
//! `"Yes"`/`"No"` strings; both spellings are accepted on read and booleans
//! are always written back.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::routing::RouteRequest;

/// Environment variable that overrides the default config location.
pub const CONFIG_ENV_VAR: &str = "JUMPTOUR_CONFIG";

const CONFIG_FILENAME: &str = "config.json";

static DEFAULT_CONFIG_PATH: Lazy<Option<PathBuf>> = Lazy::new(|| {
    ProjectDirs::from("com", "jumptour", "jumptour")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
});

/// Settings remembered between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Maximum distance of a single jump, in light-years.
    pub max_jump_range: f64,
    /// Systems file to load.
    pub filename: PathBuf,
    #[serde(deserialize_with = "deserialize_flag")]
    pub loop_back: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub final_is_last: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_jump_range: 65.0,
            filename: PathBuf::from("sys_coor.csv"),
            loop_back: false,
            final_is_last: true,
        }
    }
}

impl PlannerConfig {
    /// Build a planning request from these settings using the default
    /// algorithm.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            loop_back: self.loop_back,
            final_is_last: self.final_is_last,
            ..RouteRequest::new(self.max_jump_range)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" => Ok(true),
            "no" | "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected yes/no or a boolean, found '{other}'"
            ))),
        },
    }
}

/// Platform-specific location of the config file.
pub fn default_config_path() -> Result<PathBuf> {
    (*DEFAULT_CONFIG_PATH)
        .clone()
        .ok_or(Error::ProjectDirsUnavailable)
}

/// Resolve the config file location.
///
/// Resolution order:
/// 1. `explicit` (the `--config` flag)
/// 2. the `JUMPTOUR_CONFIG` environment variable
/// 3. [`default_config_path`]
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(value) = env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(value));
    }
    default_config_path()
}

/// Read settings from `path`, falling back to defaults when the file is
/// missing or cannot be parsed.
pub fn load_config(path: &Path) -> PlannerConfig {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "using default config");
            return PlannerConfig::default();
        }
    };

    match serde_json::from_str(&text) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring corrupt config file");
            PlannerConfig::default()
        }
    }
}

/// Write settings to `path` as pretty JSON, creating parent directories.
pub fn save_config(path: &Path, config: &PlannerConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut json = serde_json::to_string_pretty(config)?;
    json.push('\n');
    fs::write(path, json)?;
    debug!(path = %path.display(), "saved config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let config = load_config(&dir.path().join("absent.json"));
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.max_jump_range, 65.0);
        assert!(config.final_is_last);
    }

    #[test]
    fn save_then_load_restores_values() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested/dir/config.json");
        let config = PlannerConfig {
            max_jump_range: 42.5,
            filename: PathBuf::from("other.csv"),
            loop_back: true,
            final_is_last: false,
        };

        save_config(&path, &config).expect("save");
        assert_eq!(load_config(&path), config);

        let text = fs::read_to_string(&path).expect("read back");
        assert!(text.contains("\"loop_back\": true"));
    }

    #[test]
    fn legacy_yes_no_strings_are_accepted() {
        let config: PlannerConfig = serde_json::from_str(
            r#"{"max_jump_range": 80, "filename": "a.csv", "loop_back": "Yes", "final_is_last": "No"}"#,
        )
        .expect("parses");
        assert_eq!(config.max_jump_range, 80.0);
        assert!(config.loop_back);
        assert!(!config.final_is_last);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: PlannerConfig =
            serde_json::from_str(r#"{"loop_back": true}"#).expect("parses");
        assert!(config.loop_back);
        assert_eq!(config.filename, PathBuf::from("sys_coor.csv"));
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").expect("write");
        assert_eq!(load_config(&path), PlannerConfig::default());

        fs::write(&path, r#"{"loop_back": "maybe"}"#).expect("write");
        assert_eq!(load_config(&path), PlannerConfig::default());
    }

    #[test]
    fn explicit_path_wins() {
        let path = resolve_config_path(Some(Path::new("custom.json"))).expect("resolves");
        assert_eq!(path, PathBuf::from("custom.json"));
    }

    #[test]
    fn request_mirrors_config() {
        let config = PlannerConfig {
            loop_back: true,
            ..PlannerConfig::default()
        };
        let request = config.to_request();
        assert_eq!(request.max_jump, 65.0);
        assert!(request.loop_back);
        assert!(!request.has_fixed_end());
    }
}
