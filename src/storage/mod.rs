//! Storage layer for Focus Flow
//!
//! Provides JSON file storage with atomic writes and fail-soft reads.
//! Every (store, period) pair is one file in a flat data directory; there
//! are no cross-file transactions and no schema migrations.

pub mod file_io;
pub mod habits;
pub mod money;

pub use file_io::{read_json_opt, read_json_or_default, write_json_atomic};
pub use habits::HabitRepository;
pub use money::MoneyRepository;

use crate::config::paths::FlowPaths;
use crate::error::FlowError;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    paths: FlowPaths,
    pub habits: HabitRepository,
    pub money: MoneyRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FlowPaths) -> Result<Self, FlowError> {
        paths.ensure_directories()?;

        Ok(Self {
            habits: HabitRepository::new(paths.clone()),
            money: MoneyRepository::new(paths.clone()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FlowPaths {
        &self.paths
    }

    /// Delete every stored record of both stores; returns the file count
    pub fn clear_all(&self) -> Result<usize, FlowError> {
        Ok(self.habits.clear_all()? + self.money.clear_all()?)
    }
}
