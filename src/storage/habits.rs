//! Habit repository for per-week JSON storage
//!
//! Each week record is one file (`habits-<ISO Monday>.json`) holding the
//! raw name-to-days map; the user's custom habit list lives in its own
//! file and is merged into the default set when a week is loaded.

use std::collections::BTreeMap;

use crate::config::paths::{FlowPaths, HABIT_PREFIX};
use crate::error::FlowResult;
use crate::models::habit::{DayRow, HabitWeek};
use crate::models::WeekKey;

use super::file_io::{list_record_keys, read_json_or_default, remove_matching, write_json_atomic};

/// Repository for habit week persistence
pub struct HabitRepository {
    paths: FlowPaths,
}

impl HabitRepository {
    pub fn new(paths: FlowPaths) -> Self {
        Self { paths }
    }

    /// Load a week seeded with the default and custom habit lists
    ///
    /// A week with no stored record starts as an all-false grid.
    pub fn week(&self, key: &WeekKey) -> FlowResult<HabitWeek> {
        let stored = self.raw_week(key)?;
        let custom = self.custom_habits()?;
        Ok(HabitWeek::seeded(*key, &custom, stored))
    }

    /// Load exactly what was recorded for a week, without seeding
    ///
    /// This is the read path of the history aggregator: an unstored or
    /// unreadable week is an empty map.
    pub fn raw_week(&self, key: &WeekKey) -> FlowResult<BTreeMap<String, DayRow>> {
        read_json_or_default(self.paths.habit_week_file(key))
    }

    /// Persist a whole week record
    pub fn put_week(&self, week: &HabitWeek) -> FlowResult<()> {
        write_json_atomic(
            self.paths.habit_week_file(&week.week_start()),
            &week.to_stored(),
        )
    }

    /// The user's custom habit names, in the order they were added
    pub fn custom_habits(&self) -> FlowResult<Vec<String>> {
        read_json_or_default(self.paths.custom_habits_file())
    }

    /// Persist the custom habit list
    pub fn put_custom_habits(&self, habits: &[String]) -> FlowResult<()> {
        write_json_atomic(self.paths.custom_habits_file(), &habits)
    }

    /// Keys of every week with a stored record, ascending
    pub fn stored_weeks(&self) -> FlowResult<Vec<WeekKey>> {
        let keys = list_record_keys(self.paths.data_dir(), HABIT_PREFIX)?;
        Ok(keys
            .iter()
            .filter(|k| k.as_str() != "custom")
            .filter_map(|k| WeekKey::parse(k).ok())
            .collect())
    }

    /// Delete every habit record, including the custom list; returns the count
    pub fn clear_all(&self) -> FlowResult<usize> {
        remove_matching(self.paths.data_dir(), HABIT_PREFIX)
    }
}
