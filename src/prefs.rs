// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Persisted display preferences.
//!
//! The dashboard keeps a single preference: the light/dark theme. It is
//! stored as one small JSON file under the data directory and survives
//! restarts.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Errors from the preference store.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("Failed to persist preferences: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
struct StoredPrefs {
    theme: Theme,
}

/// File-backed preference store.
pub struct PreferenceStore {
    path: PathBuf,
    theme: Theme,
}

impl PreferenceStore {
    /// Open the store at `path`, loading any persisted value.
    ///
    /// A missing file means defaults; an unreadable or corrupt file also
    /// falls back to defaults rather than refusing to start over a theme.
    pub fn open(path: PathBuf) -> Self {
        let theme = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<StoredPrefs>(&raw) {
                Ok(stored) => stored.theme,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "corrupt preferences file, using defaults");
                    Theme::default()
                }
            },
            Err(_) => Theme::default(),
        };

        Self { path, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Set and persist the theme.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), PrefsError> {
        self.theme = theme;
        self.save()
    }

    /// Flip and persist the theme, returning the new value.
    pub fn toggle_theme(&mut self) -> Result<Theme, PrefsError> {
        self.set_theme(self.theme.toggled())?;
        Ok(self.theme)
    }

    fn save(&self) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let stored = StoredPrefs { theme: self.theme };
        let raw = serde_json::to_string_pretty(&stored)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> PreferenceStore {
        PreferenceStore::open(dir.path().join("prefs.json"))
    }

    #[test]
    fn defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn toggle_twice_restores_original() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let original = store.theme();

        store.toggle_theme().unwrap();
        assert_ne!(store.theme(), original);
        store.toggle_theme().unwrap();
        assert_eq!(store.theme(), original);
    }

    #[test]
    fn theme_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set_theme(Theme::Dark).unwrap();
        drop(store);

        let reopened = store_in(&dir);
        assert_eq!(reopened.theme(), Theme::Dark);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = PreferenceStore::open(path);
        assert_eq!(store.theme(), Theme::Light);
    }
}
