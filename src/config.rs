use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "RUN_SQL_LOG";

/// Prompt defaults, read from `<config dir>/run-sql/settings.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pre-filled answer of the host prompt
    pub default_host: String,
    /// Prefix of every dialog title
    pub title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_host: "localhost".to_string(),
            title: "Run SQL".to_string(),
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("run-sql");
            path.push("settings.json");
            path
        })
    }

    /// Load from the user config directory, falling back to defaults
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid settings file {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Could not read settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Dialog title for a prompt, e.g. `Run SQL - Login`
    pub fn dialog_title(&self, suffix: &str) -> String {
        format!("{} - {}", self.title, suffix)
    }
}
