//! Habit week model
//!
//! A habit week is a grid of checkboxes: one boolean per habit per day,
//! Monday through Sunday. The stored form is a plain map from habit name
//! to a seven-element day sequence; iteration order (defaults first, then
//! user-added habits) is rebuilt at load time and drives the first-match
//! tie-breaking of the derived statistics.

use std::collections::BTreeMap;

use crate::models::period::WeekKey;

/// Days per habit week, Monday through Sunday
pub const DAYS_PER_WEEK: usize = 7;

/// Day column labels in week order
pub const DAY_NAMES: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// The built-in habit list shown when no record exists for a week
pub const DEFAULT_HABITS: [&str; 13] = [
    "Wake up early",
    "Exercise",
    "Breakfast preparation",
    "Freshen up & bath",
    "Get ready for college",
    "Attend college",
    "Evening chai (no snacks)",
    "Dinner preparation",
    "Work / assignments",
    "Notes writing",
    "Skin / hair care",
    "Cybersecurity study",
    "Sleep on time",
];

/// Stored day sequence for one habit
pub type DayRow = [bool; DAYS_PER_WEEK];

/// One week of habit completion data
#[derive(Debug, Clone)]
pub struct HabitWeek {
    week_start: WeekKey,
    /// Habit names in display order
    names: Vec<String>,
    days: BTreeMap<String, DayRow>,
}

impl HabitWeek {
    /// Build a week seeded with the default habits plus the user's custom list
    ///
    /// Stored rows override the all-false seed; habit names present in the
    /// stored record but absent from both lists are kept at the end, so a
    /// habit removed from the custom list still shows its recorded history.
    pub fn seeded(
        week_start: WeekKey,
        custom_habits: &[String],
        stored: BTreeMap<String, DayRow>,
    ) -> Self {
        let mut names: Vec<String> = DEFAULT_HABITS.iter().map(|h| h.to_string()).collect();
        for habit in custom_habits {
            if !names.iter().any(|n| n == habit) {
                names.push(habit.clone());
            }
        }
        for habit in stored.keys() {
            if !names.iter().any(|n| n == habit) {
                names.push(habit.clone());
            }
        }

        let mut days = stored;
        for name in &names {
            days.entry(name.clone()).or_insert([false; DAYS_PER_WEEK]);
        }

        Self {
            week_start,
            names,
            days,
        }
    }

    /// Build a week from a raw stored record without seeding defaults
    ///
    /// Used by the history aggregator, which only looks at what was actually
    /// recorded. An unstored week is empty, not a default grid.
    pub fn from_stored(week_start: WeekKey, stored: BTreeMap<String, DayRow>) -> Self {
        let names: Vec<String> = stored.keys().cloned().collect();
        Self {
            week_start,
            names,
            days: stored,
        }
    }

    pub fn week_start(&self) -> WeekKey {
        self.week_start
    }

    /// Habit names in display order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn habit_count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Day sequence for a habit; a missing habit reads as all-false
    pub fn row(&self, habit: &str) -> DayRow {
        self.days.get(habit).copied().unwrap_or([false; DAYS_PER_WEEK])
    }

    pub fn contains(&self, habit: &str) -> bool {
        self.days.contains_key(habit)
    }

    /// Flip one day for one habit; returns false if the habit is unknown
    pub fn toggle(&mut self, habit: &str, day_index: usize) -> bool {
        debug_assert!(day_index < DAYS_PER_WEEK);
        match self.days.get_mut(habit) {
            Some(row) => {
                row[day_index] = !row[day_index];
                true
            }
            None => false,
        }
    }

    /// The stored form: habit name to day sequence
    pub fn to_stored(&self) -> BTreeMap<String, DayRow> {
        self.days.clone()
    }

    // Derived statistics. These are the single source of the completion
    // formulas, shared by the live habit store and the history aggregator.

    /// Count of completed days for one habit
    pub fn habit_total(&self, habit: &str) -> usize {
        self.row(habit).iter().filter(|done| **done).count()
    }

    /// Completion percentage for one habit (total out of 7, rounded)
    pub fn habit_percent(&self, habit: &str) -> i64 {
        round_percent(self.habit_total(habit) as i64, DAYS_PER_WEEK as i64)
    }

    /// Total completed days across all habits
    pub fn total_done(&self) -> usize {
        self.names.iter().map(|h| self.habit_total(h)).sum()
    }

    /// Overall completion percentage for the week
    ///
    /// round(100 * total-true-days / (habit count * 7)); 0 for an empty week.
    pub fn overall_percent(&self) -> i64 {
        let possible = self.names.len() * DAYS_PER_WEEK;
        if possible == 0 {
            return 0;
        }
        round_percent(self.total_done() as i64, possible as i64)
    }

    /// The habit with the most completed days; ties go to the first in order
    pub fn best_habit(&self) -> Option<&str> {
        let mut best: Option<&str> = self.names.first().map(|s| s.as_str());
        let mut max = 0;
        for habit in &self.names {
            let total = self.habit_total(habit);
            if total > max {
                max = total;
                best = Some(habit);
            }
        }
        best
    }

    /// The habit with the fewest completed days; ties go to the first in order
    pub fn most_missed(&self) -> Option<&str> {
        let mut worst: Option<&str> = self.names.first().map(|s| s.as_str());
        let mut min = DAYS_PER_WEEK + 1;
        for habit in &self.names {
            let total = self.habit_total(habit);
            if total < min {
                min = total;
                worst = Some(habit);
            }
        }
        worst
    }
}

/// round(100 * part / whole), whole must be positive
fn round_percent(part: i64, whole: i64) -> i64 {
    (part * 100 + whole / 2) / whole
}
