//! Habit week display formatting
//!
//! Renders the weekly checkbox grid and its derived statistics.

use crate::models::habit::DAY_NAMES;
use crate::models::HabitWeek;

use super::{format_bar, separator, truncate};

const NAME_WIDTH: usize = 24;

/// Format the full weekly grid with totals and percentages
pub fn format_week_grid(week: &HabitWeek) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Week of {} ({})\n",
        week.week_start(),
        week.week_start().label()
    ));
    output.push_str(&format!("{:NAME_WIDTH$}", "Habit"));
    for day in DAY_NAMES {
        output.push_str(&format!(" {:>4}", day));
    }
    output.push_str(&format!(" {:>6} {:>5}\n", "Total", "%"));
    output.push_str(&separator(NAME_WIDTH + 5 * 7 + 13));
    output.push('\n');

    for habit in week.names() {
        output.push_str(&format!("{:NAME_WIDTH$}", truncate(habit, NAME_WIDTH - 1)));
        for done in week.row(habit) {
            output.push_str(&format!(" {:>4}", if done { "✓" } else { "·" }));
        }
        output.push_str(&format!(
            " {:>6} {:>4}%\n",
            week.habit_total(habit),
            week.habit_percent(habit)
        ));
    }

    output
}

/// Format the weekly statistics footer
pub fn format_week_stats(week: &HabitWeek) -> String {
    let mut output = String::new();
    let percent = week.overall_percent();

    output.push_str(&format!(
        "Overall: {:>3}% {}\n",
        percent,
        format_bar(percent, 100, 20)
    ));
    if let Some(best) = week.best_habit() {
        output.push_str(&format!(
            "Best habit:  {} ({} days)\n",
            best,
            week.habit_total(best)
        ));
    }
    if let Some(missed) = week.most_missed() {
        output.push_str(&format!(
            "Most missed: {} ({} days)\n",
            missed,
            week.habit_total(missed)
        ));
    }

    output
}
