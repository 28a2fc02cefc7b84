//! Habit CLI commands
//!
//! Implements CLI commands for the weekly habit checklist.

use clap::Subcommand;

use crate::display::habits::{format_week_grid, format_week_stats};
use crate::error::{FlowError, FlowResult};
use crate::models::habit::DAY_NAMES;
use crate::models::WeekKey;
use crate::services::HabitService;
use crate::storage::Storage;

/// Habit subcommands
#[derive(Subcommand)]
pub enum HabitCommands {
    /// Show the weekly habit grid
    Show {
        /// How many weeks back from the current week
        #[arg(long, default_value_t = 0)]
        weeks_ago: u32,
    },

    /// Toggle one habit for one day of the week
    Toggle {
        /// Habit name
        habit: String,
        /// Day of week (mon-sun or 0-6)
        day: String,
        /// How many weeks back from the current week
        #[arg(long, default_value_t = 0)]
        weeks_ago: u32,
    },

    /// Add a custom habit
    Add {
        /// Habit name
        name: String,
    },

    /// Remove a custom habit
    Remove {
        /// Habit name
        name: String,
    },

    /// List all habit names, defaults first
    List,
}

/// Handle a habit command
pub fn handle_habit_command(storage: &Storage, cmd: HabitCommands) -> FlowResult<()> {
    let service = HabitService::new(storage);

    match cmd {
        HabitCommands::Show { weeks_ago } => {
            let week = service.week(&WeekKey::current().minus_weeks(weeks_ago))?;
            print!("{}", format_week_grid(&week));
            println!();
            print!("{}", format_week_stats(&week));
        }

        HabitCommands::Toggle {
            habit,
            day,
            weeks_ago,
        } => {
            let key = WeekKey::current().minus_weeks(weeks_ago);
            let day_index = parse_day(&day)?;
            let week = service.toggle(&key, &habit, day_index)?;
            let state = if week.row(&habit)[day_index] {
                "done"
            } else {
                "not done"
            };
            println!(
                "{}: {} marked {} ({} of 7 days this week)",
                DAY_NAMES[day_index],
                habit,
                state,
                week.habit_total(&habit)
            );
        }

        HabitCommands::Add { name } => {
            service.add_habit(&name)?;
            println!("Added habit: {}", name.trim());
        }

        HabitCommands::Remove { name } => {
            service.remove_habit(&name)?;
            println!("Removed habit: {}", name.trim());
        }

        HabitCommands::List => {
            let week = service.week(&WeekKey::current())?;
            for name in week.names() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

/// Parse a day argument as a weekday name or a 0-6 index
fn parse_day(s: &str) -> FlowResult<usize> {
    let lower = s.trim().to_lowercase();
    if let Some(index) = DAY_NAMES.iter().position(|d| d.to_lowercase() == lower) {
        return Ok(index);
    }
    match lower.parse::<usize>() {
        Ok(index) if index < DAY_NAMES.len() => Ok(index),
        _ => Err(FlowError::Validation(format!(
            "Invalid day '{}': use mon-sun or 0-6",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_names() {
        assert_eq!(parse_day("mon").unwrap(), 0);
        assert_eq!(parse_day("Sun").unwrap(), 6);
        assert_eq!(parse_day("WED").unwrap(), 2);
    }

    #[test]
    fn test_parse_day_indices() {
        assert_eq!(parse_day("0").unwrap(), 0);
        assert_eq!(parse_day("6").unwrap(), 6);
        assert!(parse_day("7").is_err());
        assert!(parse_day("yesterday").is_err());
    }
}
