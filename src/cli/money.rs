//! Money CLI commands
//!
//! Implements CLI commands for the monthly budget and expense log.
//! Mutations always target the current calendar month; past months are
//! reachable read-only through the `history` command.

use chrono::{Datelike, Local, NaiveDate};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::money::{format_expense_register, format_month_overview};
use crate::error::{FlowError, FlowResult};
use crate::models::{Amount, MonthKey};
use crate::services::MoneyService;
use crate::storage::Storage;

/// Money subcommands
#[derive(Subcommand)]
pub enum MoneyCommands {
    /// Show the monthly budget overview
    Status,

    /// Set this month's income (also recomputes the Savings budget)
    Income {
        /// Income amount
        amount: String,
    },

    /// Set one category's budget for this month
    Budget {
        /// Category name
        category: String,
        /// Budget amount
        amount: String,
    },

    /// Record an expense
    Spend {
        /// Spent amount
        amount: String,
        /// Category name
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List this month's expenses
    Expenses,

    /// Delete an expense by id (full id or unique prefix)
    Delete {
        /// Expense id
        id: String,
    },
}

/// Handle a money command
pub fn handle_money_command(
    storage: &Storage,
    settings: &Settings,
    cmd: MoneyCommands,
) -> FlowResult<()> {
    let service = MoneyService::new(storage);
    let month = MonthKey::current();
    let today = Local::now().date_naive();
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        MoneyCommands::Status => {
            let state = service.month(&month)?;
            print!("{}", format_month_overview(&state, &month, today.day(), symbol));
        }

        MoneyCommands::Income { amount } => {
            let amount = Amount::parse(&amount)?;
            let state = service.set_income(&month, amount)?;
            let savings = state
                .categories
                .iter()
                .find(|c| c.is_savings())
                .map(|c| c.budget)
                .unwrap_or_default();
            println!("Income for {} set to {}{}", month, symbol, amount);
            println!("Savings budget: {}{}", symbol, savings);
        }

        MoneyCommands::Budget { category, amount } => {
            let amount = Amount::parse(&amount)?;
            service.update_budget(&month, &category, amount)?;
            println!("Budget for '{}' set to {}{}", category, symbol, amount);
        }

        MoneyCommands::Spend {
            amount,
            category,
            date,
            note,
        } => {
            let amount = Amount::parse(&amount)?;
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => today,
            };
            let expense = service.add_expense(&month, amount, &category, date, note)?;
            let state = service.month(&month)?;
            println!(
                "Recorded {}{} on '{}' (id {})",
                symbol, expense.amount, expense.category, expense.id.short()
            );
            println!(
                "'{}' is now at {}% of budget ({})",
                expense.category,
                state.category_percent(&expense.category),
                state.alert_level(&expense.category)
            );
        }

        MoneyCommands::Expenses => {
            let state = service.month(&month)?;
            print!("{}", format_expense_register(&state, symbol));
        }

        MoneyCommands::Delete { id } => {
            let id = service.resolve_expense_id(&month, &id)?;
            let removed = service.delete_expense(&month, id)?;
            println!(
                "Deleted {}{} on '{}' ({})",
                symbol,
                removed.amount,
                removed.category,
                removed.date.format("%Y-%m-%d")
            );
        }
    }

    Ok(())
}

fn parse_date(s: &str) -> FlowResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| FlowError::Validation(format!("Invalid date '{}': use YYYY-MM-DD", s)))
}
