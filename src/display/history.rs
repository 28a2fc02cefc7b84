//! History display formatting
//!
//! Renders the month report: weekly habit trend, per-habit monthly
//! performance and the spending breakdown.

use crate::services::MonthReport;

use super::{format_amount, format_bar, separator, truncate};

/// Format a full month report
pub fn format_month_report(report: &MonthReport, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("History for {}\n", report.month.label()));
    output.push_str(&separator(50));
    output.push('\n');

    if !report.has_data() {
        output.push_str("No data for this month yet.\n");
        return output;
    }

    output.push_str(&format!("Habit average: {}%\n", report.habit_average));
    output.push_str(&format!(
        "Total spent:   {}",
        format_amount(report.money.total_spent(), symbol)
    ));
    if report.money.income.is_positive() {
        output.push_str(&format!(
            " of {}",
            format_amount(report.money.income, symbol)
        ));
    }
    output.push_str("\n\n");

    output.push_str("Weekly habit completion\n");
    for entry in &report.weeks {
        output.push_str(&format!(
            "  {:12} {:>4}% {}\n",
            entry.week.start().format("%-d %b"),
            entry.percent,
            format_bar(entry.percent, 100, 20)
        ));
    }
    output.push('\n');

    if !report.habit_monthly.is_empty() {
        output.push_str("Habit monthly performance\n");
        for habit in &report.habit_monthly {
            output.push_str(&format!(
                "  {:24} {:>4}% {}\n",
                truncate(&habit.name, 23),
                habit.percent,
                format_bar(habit.percent, 100, 20)
            ));
        }
        output.push('\n');
    }

    if !report.category_spend.is_empty() {
        output.push_str("Spending breakdown\n");
        let max = report
            .category_spend
            .iter()
            .map(|c| c.spent.units())
            .max()
            .unwrap_or(0);
        for entry in &report.category_spend {
            output.push_str(&format!(
                "  {:24} {:>9} {}\n",
                truncate(&entry.category.to_string(), 23),
                format_amount(entry.spent, symbol),
                format_bar(entry.spent.units(), max, 20)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlowPaths;
    use crate::models::{Amount, MonthKey};
    use crate::services::{HistoryService, MoneyService};
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_empty_report() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(FlowPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let report = HistoryService::new(&storage)
            .month_report(&MonthKey::new(2026, 7).unwrap())
            .unwrap();

        let output = format_month_report(&report, "₹");
        assert!(output.contains("No data for this month yet."));
    }

    #[test]
    fn test_report_with_spending() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(FlowPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let key = MonthKey::new(2026, 8).unwrap();
        let money = MoneyService::new(&storage);
        money.set_income(&key, Amount::new(10000)).unwrap();
        money
            .add_expense(
                &key,
                Amount::new(500),
                "Cook items",
                NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
                None,
            )
            .unwrap();

        let report = HistoryService::new(&storage).month_report(&key).unwrap();
        let output = format_month_report(&report, "₹");
        assert!(output.contains("Total spent:   ₹500 of ₹10000"));
        assert!(output.contains("Spending breakdown"));
    }
}
