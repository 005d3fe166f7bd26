//! User preference persistence for Datascrub.
//!
//! This module provides a tiny JSON-backed store that records lightweight
//! configuration such as the user's preferred theme and the last selector
//! that was edited. The file is written to the standard configuration
//! directory (`~/.config/datascrub/preferences.json` on most platforms) and is
//! safe to read/write from multiple threads thanks to the internal `Mutex`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::app_file_path;

/// Environment variable allowing callers to override the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "DATASCRUB_PREFERENCES_PATH";

/// Default filename for the JSON payload.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Error surfaced when reading or writing preferences fails.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted preference values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesPayload {
    /// Canonical identifier of the theme selected via the TUI.
    #[serde(default)]
    pub preferred_theme: Option<String>,
    /// Selector value present in the field when the TUI last exited.
    #[serde(default)]
    pub last_selector_value: Option<String>,
}

/// Thread-safe preferences store backed by a JSON file.
#[derive(Debug, Default)]
pub struct UserPreferences {
    path: PathBuf,
    payload: Mutex<PreferencesPayload>,
    persist_to_disk: bool,
}

impl UserPreferences {
    /// Create a store rooted at the default path (or the env override).
    pub fn new() -> Result<Self, PreferencesError> {
        Self::at_path(app_file_path(PREFERENCES_PATH_ENV, PREFERENCES_FILE_NAME))
    }

    /// Create a store rooted at an explicit path.
    pub fn at_path(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let path = path.into();
        let payload = load_payload(&path)?;
        Ok(Self {
            path,
            payload: Mutex::new(payload),
            persist_to_disk: true,
        })
    }

    /// Build an in-memory store used as a fallback when the config directory cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(PreferencesPayload::default()),
            persist_to_disk: false,
        }
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the canonical identifier of the preferred theme, if one was saved.
    pub fn preferred_theme(&self) -> Option<String> {
        self.lock().preferred_theme.clone()
    }

    /// Persist a new preferred theme identifier.
    pub fn set_preferred_theme(&self, theme_id: Option<String>) -> Result<(), PreferencesError> {
        let mut payload = self.lock();
        payload.preferred_theme = theme_id;
        self.save_locked(&payload)
    }

    pub fn last_selector_value(&self) -> Option<String> {
        self.lock().last_selector_value.clone()
    }

    /// Persist the selector value; blank values clear the entry.
    pub fn set_last_selector_value(&self, value: &str) -> Result<(), PreferencesError> {
        let mut payload = self.lock();
        payload.last_selector_value = if value.trim().is_empty() { None } else { Some(value.to_string()) };
        self.save_locked(&payload)
    }

    fn lock(&self) -> MutexGuard<'_, PreferencesPayload> {
        self.payload.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn save_locked(&self, payload: &PreferencesPayload) -> Result<(), PreferencesError> {
        if !self.persist_to_disk {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

fn load_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse preferences file; using defaults"
                );
                Ok(PreferencesPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(PreferencesPayload::default()),
        Err(error) => Err(PreferencesError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let prefs = UserPreferences::at_path(dir.path().join("nested/preferences.json")).unwrap();
        assert_eq!(prefs.preferred_theme(), None);
        assert_eq!(prefs.last_selector_value(), None);
    }

    #[test]
    fn values_persist_across_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/preferences.json");
        let prefs = UserPreferences::at_path(&path).unwrap();
        prefs.set_preferred_theme(Some("dracula".into())).unwrap();
        prefs.set_last_selector_value("$string && $user").unwrap();
        drop(prefs);

        let reloaded = UserPreferences::at_path(&path).unwrap();
        assert_eq!(reloaded.preferred_theme().as_deref(), Some("dracula"));
        assert_eq!(reloaded.last_selector_value().as_deref(), Some("$string && $user"));
    }

    #[test]
    fn blank_selector_value_clears_entry() {
        let dir = tempdir().unwrap();
        let prefs = UserPreferences::at_path(dir.path().join("preferences.json")).unwrap();
        prefs.set_last_selector_value("$http").unwrap();
        prefs.set_last_selector_value("   ").unwrap();
        assert_eq!(prefs.last_selector_value(), None);
    }

    #[test]
    fn invalid_json_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "not json").unwrap();
        let prefs = UserPreferences::at_path(&path).unwrap();
        assert_eq!(prefs.preferred_theme(), None);
    }

    #[test]
    fn ephemeral_store_never_touches_disk() {
        let prefs = UserPreferences::ephemeral();
        prefs.set_preferred_theme(Some("nord".into())).unwrap();
        assert_eq!(prefs.preferred_theme().as_deref(), Some("nord"));
        assert_eq!(prefs.path(), Path::new(""));
    }

    #[test]
    fn default_path_honors_env_override() {
        let dir = tempdir().unwrap();
        let override_path = dir.path().join("custom.json");
        temp_env::with_var(PREFERENCES_PATH_ENV, Some(override_path.to_str().unwrap()), || {
            let prefs = UserPreferences::new().unwrap();
            assert_eq!(prefs.path(), override_path.as_path());
        });
    }
}
