//! History CLI command
//!
//! Read-only month navigation over everything in storage.

use clap::Args;

use crate::config::Settings;
use crate::display::history::format_month_report;
use crate::error::FlowResult;
use crate::models::MonthKey;
use crate::services::HistoryService;
use crate::storage::Storage;

/// Arguments for the history command
#[derive(Args)]
pub struct HistoryArgs {
    /// Month to show (YYYY-MM), defaults to the current month
    #[arg(long, conflicts_with = "months_ago")]
    pub month: Option<String>,

    /// How many months back from the current month
    #[arg(long, default_value_t = 0)]
    pub months_ago: u32,

    /// List every month with recorded data instead of showing a report
    #[arg(long, conflicts_with_all = ["month", "months_ago"])]
    pub list: bool,
}

/// Handle the history command
pub fn handle_history_command(
    storage: &Storage,
    settings: &Settings,
    args: HistoryArgs,
) -> FlowResult<()> {
    if args.list {
        let months = HistoryService::new(storage).recorded_months()?;
        if months.is_empty() {
            println!("No recorded data yet.");
        } else {
            println!("Months with recorded data:");
            for month in months {
                println!("  {}  {}", month, month.label());
            }
        }
        return Ok(());
    }

    let month = match args.month {
        // Navigation is clamped at the current month
        Some(s) => MonthKey::parse(&s)?.clamp_to_current(),
        None => MonthKey::current().minus_months(args.months_ago),
    };

    let report = HistoryService::new(storage).month_report(&month)?;
    print!(
        "{}",
        format_month_report(&report, settings.currency_symbol.as_str())
    );

    Ok(())
}
