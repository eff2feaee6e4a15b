//! User preferences persistence.
//!
//! Stores user preferences in `~/.cruciverbal/preferences.json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for preferences operations.
#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// User preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// How many clues of each orientation to list when a puzzle is opened.
    #[serde(default = "default_clue_preview")]
    pub clue_preview: usize,
    /// Write every line read back to the output, for scripted sessions.
    #[serde(default)]
    pub echo_input: bool,
    /// Directory searched for puzzle names that are not found as given.
    #[serde(default)]
    pub puzzle_dir: Option<PathBuf>,
}

fn default_clue_preview() -> usize {
    5
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            clue_preview: default_clue_preview(),
            echo_input: false,
            puzzle_dir: None,
        }
    }
}

/// Get the preferences file path (`~/.cruciverbal/preferences.json`).
pub fn preferences_path() -> Result<PathBuf, PreferencesError> {
    let home = dirs::home_dir().ok_or(PreferencesError::NoHomeDir)?;
    Ok(home.join(".cruciverbal").join("preferences.json"))
}

/// Load preferences from disk.
///
/// Returns default preferences if the file doesn't exist or can't be read.
pub fn load_preferences() -> Preferences {
    match preferences_path() {
        Ok(path) => load_preferences_from(&path),
        Err(e) => {
            tracing::debug!("Using default preferences: {}", e);
            Preferences::default()
        }
    }
}

/// Load preferences from a specific file, falling back to defaults.
pub fn load_preferences_from(path: &Path) -> Preferences {
    if !path.exists() {
        return Preferences::default();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Could not read {}: {}", path.display(), e);
            return Preferences::default();
        }
    };

    serde_json::from_str(&contents).unwrap_or_else(|e| {
        tracing::warn!("Ignoring malformed preferences in {}: {}", path.display(), e);
        Preferences::default()
    })
}
