//! Name and reset CLI commands
//!
//! The name commands manage the stored user name the greeting flow uses;
//! the reset commands bulk-delete period records. Bulk deletion is
//! treated as always-succeeding: a missing record is simply not counted.

use clap::Subcommand;

use crate::config::{FlowPaths, Settings};
use crate::error::{FlowError, FlowResult};
use crate::storage::Storage;

/// Name subcommands
#[derive(Subcommand)]
pub enum NameCommands {
    /// Set your name
    Set {
        /// The name to greet you with
        name: String,
    },

    /// Show the stored name
    Show,

    /// Clear the stored name so the greeting asks again
    Reset,
}

/// Reset subcommands
#[derive(Subcommand)]
pub enum ResetCommands {
    /// Delete all habit records
    Habits,

    /// Delete all money records
    Money,

    /// Delete everything, including the stored name
    All,
}

/// Handle a name command
pub fn handle_name_command(
    paths: &FlowPaths,
    settings: &mut Settings,
    cmd: NameCommands,
) -> FlowResult<()> {
    match cmd {
        NameCommands::Set { name } => {
            if !settings.set_user_name(&name) {
                return Err(FlowError::Validation("Name cannot be empty".into()));
            }
            settings.save(paths)?;
            println!("Name updated: {}", settings.user_name().unwrap_or_default());
        }

        NameCommands::Show => match settings.user_name() {
            Some(name) => println!("Currently: {}", name),
            None => println!("No name set"),
        },

        NameCommands::Reset => {
            settings.reset_user_name();
            settings.save(paths)?;
            println!("Name reset. You will be asked on next run.");
        }
    }

    Ok(())
}

/// Handle a reset command
pub fn handle_reset_command(
    storage: &Storage,
    paths: &FlowPaths,
    settings: &mut Settings,
    cmd: ResetCommands,
) -> FlowResult<()> {
    match cmd {
        ResetCommands::Habits => {
            let removed = storage.habits.clear_all()?;
            println!("Cleared {} habit entries", removed);
        }

        ResetCommands::Money => {
            let removed = storage.money.clear_all()?;
            println!("Cleared {} money entries", removed);
        }

        ResetCommands::All => {
            let removed = storage.clear_all()?;
            settings.reset_user_name();
            settings.save(paths)?;
            println!("All data cleared ({} entries). Next run starts fresh.", removed);
        }
    }

    Ok(())
}
