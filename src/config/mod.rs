//! Configuration module for Focus Flow
//!
//! This module provides configuration management including:
//! - Path resolution for the data directory and period record files
//! - User settings persistence (name, display preferences)

pub mod paths;
pub mod settings;

pub use paths::FlowPaths;
pub use settings::Settings;
