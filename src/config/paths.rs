//! Path management for Focus Flow
//!
//! Resolves where settings and period records live on disk. Each storage
//! key of the app maps to one JSON file inside the data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `FOCUS_FLOW_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_DATA_HOME/focus-flow` or `~/.local/share/focus-flow`
//! 3. Windows: `%APPDATA%\focus-flow`

use std::path::PathBuf;

use crate::error::FlowError;
use crate::models::{MonthKey, WeekKey};

/// Prefix of habit week record files
pub const HABIT_PREFIX: &str = "habits-";

/// Prefix shared by all money record files
pub const MONEY_PREFIX: &str = "money-";

/// Manages all paths used by Focus Flow
#[derive(Debug, Clone)]
pub struct FlowPaths {
    base_dir: PathBuf,
}

impl FlowPaths {
    /// Create a new FlowPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FlowError> {
        let base_dir = if let Ok(custom) = std::env::var("FOCUS_FLOW_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FlowPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding all period record files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to a habit week record, e.g. `habits-2026-08-24.json`
    pub fn habit_week_file(&self, week: &WeekKey) -> PathBuf {
        self.data_dir().join(format!("{}{}.json", HABIT_PREFIX, week))
    }

    /// Get the path to the user's custom habit list
    pub fn custom_habits_file(&self) -> PathBuf {
        self.data_dir().join("habits-custom.json")
    }

    /// Get the path to a month's income record, e.g. `money-income-2026-08.json`
    pub fn money_income_file(&self, month: &MonthKey) -> PathBuf {
        self.data_dir().join(format!("money-income-{}.json", month))
    }

    /// Get the path to a month's category record
    pub fn money_categories_file(&self, month: &MonthKey) -> PathBuf {
        self.data_dir().join(format!("money-categories-{}.json", month))
    }

    /// Get the path to a month's expense record
    pub fn money_expenses_file(&self, month: &MonthKey) -> PathBuf {
        self.data_dir().join(format!("money-expenses-{}.json", month))
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), FlowError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FlowError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FlowError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FlowError> {
    let data_base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".local").join("share")
        });
    Ok(data_base.join("focus-flow"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FlowError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FlowError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("focus-flow"))
}
