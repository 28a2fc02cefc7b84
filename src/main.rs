use anyhow::Result;
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};

use focus_flow::cli::{
    handle_habit_command, handle_history_command, handle_money_command, handle_name_command,
    handle_reset_command, HabitCommands, HistoryArgs, MoneyCommands, NameCommands, ResetCommands,
};
use focus_flow::config::{FlowPaths, Settings};
use focus_flow::display::habits::{format_week_grid, format_week_stats};
use focus_flow::display::money::format_month_overview;
use focus_flow::models::{MonthKey, WeekKey};
use focus_flow::services::{HabitService, MoneyService};
use focus_flow::setup;
use focus_flow::storage::Storage;

#[derive(Parser)]
#[command(
    name = "focus",
    version,
    about = "Weekly habits and monthly budget, tracked from the terminal",
    long_about = "Focus Flow keeps a weekly habit checklist and a monthly budget \
                  with an expense log in plain JSON files. Run it without a \
                  subcommand for the greeting and this week's dashboard."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Weekly habit checklist commands
    #[command(subcommand)]
    Habit(HabitCommands),

    /// Monthly budget and expense commands
    #[command(subcommand)]
    Money(MoneyCommands),

    /// Past months at a glance
    History(HistoryArgs),

    /// Manage the stored name
    #[command(subcommand)]
    Name(NameCommands),

    /// Delete stored records
    #[command(subcommand)]
    Reset(ResetCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = FlowPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Habit(cmd)) => {
            handle_habit_command(&storage, cmd)?;
        }
        Some(Commands::Money(cmd)) => {
            handle_money_command(&storage, &settings, cmd)?;
        }
        Some(Commands::History(args)) => {
            handle_history_command(&storage, &settings, args)?;
        }
        Some(Commands::Name(cmd)) => {
            handle_name_command(&paths, &mut settings, cmd)?;
        }
        Some(Commands::Reset(cmd)) => {
            handle_reset_command(&storage, &paths, &mut settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Focus Flow Configuration");
            println!("========================");
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Name:            {}", settings.user_name().unwrap_or("(not set)"));
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Reduced motion:  {}", settings.reduced_motion);
        }
        None => {
            setup::run(&paths, &mut settings)?;
            show_dashboard(&storage, &settings)?;
        }
    }

    Ok(())
}

/// This week's habit grid followed by this month's budget overview
fn show_dashboard(storage: &Storage, settings: &Settings) -> Result<()> {
    let week = HabitService::new(storage).week(&WeekKey::current())?;
    print!("{}", format_week_grid(&week));
    println!();
    print!("{}", format_week_stats(&week));
    println!();

    let month = MonthKey::current();
    let state = MoneyService::new(storage).month(&month)?;
    print!(
        "{}",
        format_month_overview(
            &state,
            &month,
            Local::now().date_naive().day(),
            settings.currency_symbol.as_str()
        )
    );

    Ok(())
}
