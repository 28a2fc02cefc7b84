//! Money display formatting
//!
//! Renders the monthly budget overview and the expense register.

use crate::models::{MonthKey, MonthlyMoneyState};

use super::{format_alert, format_amount, format_amount_colored, format_bar, separator, truncate};

const NAME_WIDTH: usize = 20;

/// Format the monthly budget overview with per-category alert levels
pub fn format_month_overview(
    state: &MonthlyMoneyState,
    month: &MonthKey,
    day_of_month: u32,
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Money for {} ({})\n\n", month, month.label()));
    output.push_str(&format!(
        "Income:        {}\n",
        format_amount(state.income, symbol)
    ));
    output.push_str(&format!(
        "Total budget:  {}\n",
        format_amount(state.total_budget(), symbol)
    ));
    output.push_str(&format!(
        "Total spent:   {}\n",
        format_amount(state.total_spent(), symbol)
    ));
    output.push_str(&format!(
        "Remaining:     {}\n",
        format_amount_colored(state.total_remaining(), symbol)
    ));
    output.push_str(&format!(
        "Daily average: {}\n",
        format_amount(state.daily_average(day_of_month), symbol)
    ));
    if let Some(highest) = state.highest_category() {
        output.push_str(&format!(
            "Top category:  {} ({})\n",
            highest,
            format_amount(state.category_spent(&highest.name), symbol)
        ));
    }
    output.push('\n');

    output.push_str(&format!(
        "{:NAME_WIDTH$} {:>9} {:>9} {:>9} {:>5}  {:12} {}\n",
        "Category", "Budget", "Spent", "Left", "%", "", "Alert"
    ));
    output.push_str(&separator(NAME_WIDTH + 52));
    output.push('\n');

    for category in &state.categories {
        let name = &category.name;
        let percent = state.category_percent(name);
        output.push_str(&format!(
            "{:NAME_WIDTH$} {:>9} {:>9} {:>9} {:>4}%  {} {}\n",
            truncate(&category.to_string(), NAME_WIDTH - 1),
            format_amount(category.budget, symbol),
            format_amount(state.category_spent(name), symbol),
            format_amount(state.category_remaining(name), symbol),
            percent,
            format_bar(percent, 100, 12),
            format_alert(state.alert_level(name)),
        ));
    }

    output
}

/// Format the expense register, newest last
pub fn format_expense_register(state: &MonthlyMoneyState, symbol: &str) -> String {
    if state.expenses.is_empty() {
        return "No expenses recorded this month.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:8} {:10} {:NAME_WIDTH$} {:>9}  {}\n",
        "Id", "Date", "Category", "Amount", "Note"
    ));
    output.push_str(&separator(70));
    output.push('\n');

    for expense in &state.expenses {
        output.push_str(&format!(
            "{:8} {:10} {:NAME_WIDTH$} {:>9}  {}\n",
            expense.id.short(),
            expense.date.format("%Y-%m-%d"),
            truncate(&expense.category, NAME_WIDTH - 1),
            format_amount(expense.amount, symbol),
            expense.note.as_deref().unwrap_or(""),
        ));
    }
    output.push_str(&format!(
        "\nTotal: {}\n",
        format_amount(state.total_spent(), symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_categories, Amount, Expense};
    use chrono::NaiveDate;

    fn sample_state() -> MonthlyMoneyState {
        MonthlyMoneyState {
            income: Amount::new(10000),
            categories: default_categories(),
            expenses: vec![Expense::new(
                Amount::new(500),
                "Cook items",
                NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
            )
            .with_note("groceries")],
        }
    }

    #[test]
    fn test_overview_contains_summary_lines() {
        let month = MonthKey::new(2026, 8).unwrap();
        let output = format_month_overview(&sample_state(), &month, 25, "₹");
        assert!(output.contains("Income:        ₹10000"));
        assert!(output.contains("Total spent:   ₹500"));
        assert!(output.contains("Cook items"));
        assert!(output.contains("safe"));
    }

    #[test]
    fn test_expense_register() {
        let output = format_expense_register(&sample_state(), "₹");
        assert!(output.contains("groceries"));
        assert!(output.contains("Total: ₹500"));

        let empty = MonthlyMoneyState::default();
        assert!(format_expense_register(&empty, "₹").contains("No expenses"));
    }
}
