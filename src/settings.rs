//! Demo host settings storage

use crate::error::{Result, SearchBarError};
use crate::search::SearchBarOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme (dark/light/system)
    pub theme: Theme,

    /// Initial search bar configuration
    pub search: SearchBarOptions,

    /// Window settings
    pub window: WindowSettings,
}

/// Theme options
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
    System,
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 480.0,
        }
    }
}

impl WindowSettings {
    /// Remember the window's inner size, ignoring degenerate sizes
    pub fn record_size(&mut self, width: f32, height: f32) {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            self.width = width;
            self.height = height;
        }
    }
}

/// Platform data directory for the demo
pub fn default_data_dir() -> Result<PathBuf> {
    directories::ProjectDirs::from("org", "search-bar", "SearchBar")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(SearchBarError::NoDataDir)
}

/// Settings repository
pub struct SettingsRepository {
    settings_path: PathBuf,
    settings: Settings,
}

impl SettingsRepository {
    /// Load settings from `data_dir`, falling back to defaults
    pub fn new(data_dir: &Path) -> Self {
        let settings_path = data_dir.join(SETTINGS_FILE);

        let settings = match std::fs::read_to_string(&settings_path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable {}: {}", settings_path.display(), e);
                Settings::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Settings::default(),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", settings_path.display(), e);
                Settings::default()
            }
        };

        Self {
            settings_path,
            settings,
        }
    }

    pub fn path(&self) -> &Path {
        &self.settings_path
    }

    /// Get current settings
    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Get mutable settings
    pub fn get_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Save settings
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.settings)?;
        std::fs::write(&self.settings_path, content)?;
        tracing::debug!("Saved settings to {}", self.settings_path.display());
        Ok(())
    }

    /// Reset to defaults
    pub fn reset(&mut self) {
        self.settings = Settings::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let repo = SettingsRepository::new(dir.path());
        assert_eq!(repo.get(), &Settings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested");

        let mut repo = SettingsRepository::new(&nested);
        repo.get_mut().theme = Theme::Light;
        repo.get_mut().search = SearchBarOptions::default()
            .debounce_time_ms(300)
            .placeholder("Find a fruit");
        repo.save().unwrap();
        assert!(repo.path().exists());

        let reloaded = SettingsRepository::new(&nested);
        assert_eq!(reloaded.get().theme, Theme::Light);
        assert_eq!(reloaded.get().search.debounce_time_ms, 300);
        assert_eq!(reloaded.get().search.placeholder, "Find a fruit");
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "{ not json").unwrap();
        let repo = SettingsRepository::new(dir.path());
        assert_eq!(repo.get(), &Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{ "search": { "minCharacterLength": -2, "debounceTimeMs": "250" } }"#,
        )
        .unwrap();

        let repo = SettingsRepository::new(dir.path());
        let search = &repo.get().search;
        assert_eq!(search.debounce_time_ms, 250);
        assert_eq!(search.normalized().min_character_length, 3);
        assert_eq!(repo.get().window, WindowSettings::default());
    }

    #[test]
    fn test_window_size_persists() {
        let dir = tempdir().unwrap();
        let mut repo = SettingsRepository::new(dir.path());
        repo.get_mut().window.record_size(1024.0, 640.0);
        repo.get_mut().window.record_size(0.0, f32::NAN);
        repo.save().unwrap();

        let reloaded = SettingsRepository::new(dir.path());
        assert_eq!(reloaded.get().window.width, 1024.0);
        assert_eq!(reloaded.get().window.height, 640.0);
    }

    #[test]
    fn test_reset() {
        let dir = tempdir().unwrap();
        let mut repo = SettingsRepository::new(dir.path());
        repo.get_mut().window.width = 1.0;
        repo.reset();
        assert_eq!(repo.get(), &Settings::default());
    }
}
