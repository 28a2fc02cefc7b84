//! User settings for Focus Flow
//!
//! The settings file holds the user's name and display preferences. The
//! name is an explicit settings value with a documented load/save
//! lifecycle: it is read once at startup, and written only through
//! `Settings::save` (by the greeting flow or the `name` commands).

use serde::{Deserialize, Serialize};

use super::paths::FlowPaths;
use crate::error::FlowError;

/// User settings for Focus Flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// The user's name, asked on first run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// Currency symbol used by the display layer
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Shorten the greeting delay when set
    #[serde(default)]
    pub reduced_motion: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            user_name: None,
            currency_symbol: default_currency(),
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// The stored user name, if any
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Set the user name; blank names are rejected silently
    pub fn set_user_name(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.user_name = Some(trimmed.to_string());
        true
    }

    /// Clear the stored name so the greeting asks again on next run
    pub fn reset_user_name(&mut self) {
        self.user_name = None;
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FlowPaths) -> Result<Self, FlowError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FlowError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| FlowError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FlowPaths) -> Result<(), FlowError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FlowError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FlowError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.user_name().is_none());
        assert_eq!(settings.currency_symbol, "₹");
        assert!(!settings.reduced_motion);
    }

    #[test]
    fn test_set_user_name_rejects_blank() {
        let mut settings = Settings::default();
        assert!(!settings.set_user_name("   "));
        assert!(settings.user_name().is_none());

        assert!(settings.set_user_name("  Asha  "));
        assert_eq!(settings.user_name(), Some("Asha"));
    }

    #[test]
    fn test_reset_user_name() {
        let mut settings = Settings::default();
        settings.set_user_name("Asha");
        settings.reset_user_name();
        assert!(settings.user_name().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FlowPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.set_user_name("Asha");
        settings.reduced_motion = true;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.user_name(), Some("Asha"));
        assert!(loaded.reduced_motion);
    }

    #[test]
    fn test_load_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FlowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(settings.user_name().is_none());
    }
}
