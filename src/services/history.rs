//! History aggregator
//!
//! Read-only view over past months. For a navigated month it scans every
//! habit week whose Monday falls inside the month plus the month's money
//! record, reading raw storage without seeding defaults, and derives the
//! same statistics the live stores expose. The formulas themselves live
//! on `HabitWeek` and `MonthlyMoneyState`, so this module only assembles
//! the wider window.

use crate::error::FlowResult;
use crate::models::habit::DAYS_PER_WEEK;
use crate::models::{Amount, BudgetCategory, HabitWeek, MonthKey, MonthlyMoneyState, WeekKey};
use crate::storage::Storage;

/// One week's contribution to a month report
#[derive(Debug, Clone)]
pub struct WeekEntry {
    pub week: WeekKey,
    /// Overall completion percent of what was recorded that week
    pub percent: i64,
    /// Habits recorded that week, in display order
    pub habits: Vec<String>,
}

/// Per-habit completion across the weeks of a month
#[derive(Debug, Clone)]
pub struct HabitMonthly {
    pub name: String,
    /// round(100 * completed days / (7 * weeks the habit appears in))
    pub percent: i64,
}

/// Spend against one category of the navigated month
#[derive(Debug, Clone)]
pub struct CategorySpend {
    pub category: BudgetCategory,
    pub spent: Amount,
}

/// Everything the history view shows for one month
#[derive(Debug)]
pub struct MonthReport {
    pub month: MonthKey,
    pub money: MonthlyMoneyState,
    pub category_spend: Vec<CategorySpend>,
    pub weeks: Vec<WeekEntry>,
    /// Average of the weekly overall percents, all scanned weeks included
    pub habit_average: i64,
    pub habit_monthly: Vec<HabitMonthly>,
}

impl MonthReport {
    /// Whether anything at all was recorded in this month
    pub fn has_data(&self) -> bool {
        self.money.has_data() || self.weeks.iter().any(|w| w.percent > 0)
    }
}

/// Service assembling month reports from raw storage
pub struct HistoryService<'a> {
    storage: &'a Storage,
}

impl<'a> HistoryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Months with any stored record in either store, ascending
    ///
    /// Habit weeks count toward the month their Monday falls in, the same
    /// window `month_report` scans.
    pub fn recorded_months(&self) -> FlowResult<Vec<MonthKey>> {
        let mut months = self.storage.money.stored_months()?;
        for week in self.storage.habits.stored_weeks()? {
            let month = week.month();
            if !months.contains(&month) {
                months.push(month);
            }
        }
        months.sort();
        Ok(months)
    }

    /// Build the report for one month
    pub fn month_report(&self, month: &MonthKey) -> FlowResult<MonthReport> {
        let money = self.storage.money.month_raw(month)?;

        let category_spend = money
            .categories
            .iter()
            .map(|category| CategorySpend {
                spent: money.category_spent(&category.name),
                category: category.clone(),
            })
            .collect();

        let mut week_records = Vec::new();
        for key in month.mondays() {
            let stored = self.storage.habits.raw_week(&key)?;
            week_records.push(HabitWeek::from_stored(key, stored));
        }

        let weeks: Vec<WeekEntry> = week_records
            .iter()
            .map(|week| WeekEntry {
                week: week.week_start(),
                percent: week.overall_percent(),
                habits: week.names().to_vec(),
            })
            .collect();

        let habit_average = if weeks.is_empty() {
            0
        } else {
            let sum: i64 = weeks.iter().map(|w| w.percent).sum();
            let count = weeks.len() as i64;
            (sum + count / 2) / count
        };

        let habit_monthly = per_habit_monthly(&week_records);

        Ok(MonthReport {
            month: *month,
            money,
            category_spend,
            weeks,
            habit_average,
            habit_monthly,
        })
    }
}

/// Per-habit percent over the weeks where the habit was recorded
fn per_habit_monthly(weeks: &[HabitWeek]) -> Vec<HabitMonthly> {
    let mut names: Vec<String> = Vec::new();
    for week in weeks {
        for name in week.names() {
            if !names.iter().any(|n| n == name) {
                names.push(name.clone());
            }
        }
    }

    names
        .into_iter()
        .map(|name| {
            let mut done = 0usize;
            let mut possible = 0usize;
            for week in weeks {
                if week.contains(&name) {
                    done += week.habit_total(&name);
                    possible += DAYS_PER_WEEK;
                }
            }
            let percent = if possible == 0 {
                0
            } else {
                (done as i64 * 100 + possible as i64 / 2) / possible as i64
            };
            HabitMonthly { name, percent }
        })
        .collect()
}
