//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod habit;
pub mod history;
pub mod money;
pub mod settings;

pub use habit::{handle_habit_command, HabitCommands};
pub use history::{handle_history_command, HistoryArgs};
pub use money::{handle_money_command, MoneyCommands};
pub use settings::{handle_name_command, handle_reset_command, NameCommands, ResetCommands};
