use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::expense::{Category, Currency};

const SETTINGS_FILE: &str = "swipense_settings.json";

/// Which color scheme to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemePreference {
    /// Follow the OS preference; auto-switches until the user picks a theme
    System,
    Light,
    Dark,
}

impl ThemePreference {
    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::System => "System",
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
        }
    }
}

fn default_theme() -> ThemePreference {
    ThemePreference::System
}

fn default_currency() -> Currency {
    Currency::Usd
}

fn default_category() -> Category {
    Category::Food
}

/// User settings that persist between sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    /// Selected color scheme
    #[serde(default = "default_theme")]
    pub theme: ThemePreference,
    /// Currency preselected when adding a new expense
    #[serde(default = "default_currency")]
    pub default_currency: Currency,
    /// Category preselected when adding a new expense
    #[serde(default = "default_category")]
    pub default_category: Category,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            default_currency: default_currency(),
            default_category: default_category(),
        }
    }
}

impl UserSettings {
    /// Get the settings file path
    fn settings_path() -> PathBuf {
        // Try to use the app data directory, fall back to current directory
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("swipense");
            if !app_dir.exists() {
                let _ = fs::create_dir_all(&app_dir);
            }
            app_dir.join(SETTINGS_FILE)
        } else {
            PathBuf::from(SETTINGS_FILE)
        }
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::settings_path();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(settings) => {
                        tracing::info!("Loaded settings from {:?}", path);
                        return settings;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse settings file: {}", e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read settings file: {}", e);
                }
            }
        }
        tracing::info!("Using default settings");
        Self::default()
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Get the settings file path for display
    pub fn settings_path_display() -> String {
        Self::settings_path().display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== default tests ====================

    #[test]
    fn test_default_settings() {
        let settings = UserSettings::default();
        assert_eq!(settings.theme, ThemePreference::System);
        assert_eq!(settings.default_currency, Currency::Usd);
        assert_eq!(settings.default_category, Category::Food);
    }

    // ==================== serde tests ====================

    #[test]
    fn test_roundtrip_through_json() {
        let mut settings = UserSettings::default();
        settings.theme = ThemePreference::Dark;
        settings.default_currency = Currency::Eur;
        settings.default_category = Category::Travel;

        let json = serde_json::to_string(&settings).unwrap();
        let loaded: UserSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.theme, ThemePreference::Dark);
        assert_eq!(loaded.default_currency, Currency::Eur);
        assert_eq!(loaded.default_category, Category::Travel);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        // Settings written by an older version only knew about the theme
        let loaded: UserSettings = serde_json::from_str(r#"{"theme":"Light"}"#).unwrap();
        assert_eq!(loaded.theme, ThemePreference::Light);
        assert_eq!(loaded.default_currency, Currency::Usd);
        assert_eq!(loaded.default_category, Category::Food);
    }

    #[test]
    fn test_empty_object_uses_all_defaults() {
        let loaded: UserSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(loaded.theme, ThemePreference::System);
    }
}
