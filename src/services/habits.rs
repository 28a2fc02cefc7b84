//! Habit store service
//!
//! Business logic over the habit repository: toggling days, managing the
//! custom habit list and loading weeks for display. All completion
//! statistics live on `HabitWeek` itself.

use crate::error::{FlowError, FlowResult};
use crate::models::habit::{DAYS_PER_WEEK, DEFAULT_HABITS};
use crate::models::{HabitWeek, WeekKey};
use crate::storage::Storage;

/// Service for habit tracking
pub struct HabitService<'a> {
    storage: &'a Storage,
}

impl<'a> HabitService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load a week, seeded with defaults and custom habits
    pub fn week(&self, key: &WeekKey) -> FlowResult<HabitWeek> {
        self.storage.habits.week(key)
    }

    /// Flip one day for one habit and persist the whole week record
    pub fn toggle(&self, key: &WeekKey, habit: &str, day_index: usize) -> FlowResult<HabitWeek> {
        if day_index >= DAYS_PER_WEEK {
            return Err(FlowError::Validation(format!(
                "Day index must be 0-6, got {}",
                day_index
            )));
        }

        let mut week = self.storage.habits.week(key)?;
        if !week.toggle(habit, day_index) {
            return Err(FlowError::habit_not_found(habit));
        }
        self.storage.habits.put_week(&week)?;
        Ok(week)
    }

    /// Add a habit to the persisted custom list
    ///
    /// Blank names and names already present (default or custom) are rejected.
    pub fn add_habit(&self, name: &str) -> FlowResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FlowError::Validation("Habit name cannot be empty".into()));
        }

        let mut custom = self.storage.habits.custom_habits()?;
        let exists = DEFAULT_HABITS.iter().any(|h| *h == name)
            || custom.iter().any(|h| h == name);
        if exists {
            return Err(FlowError::Duplicate {
                entity_type: "Habit",
                identifier: name.to_string(),
            });
        }

        custom.push(name.to_string());
        self.storage.habits.put_custom_habits(&custom)
    }

    /// Remove a habit from the custom list
    ///
    /// Default habits cannot be removed; already-recorded weeks keep the
    /// habit's history.
    pub fn remove_habit(&self, name: &str) -> FlowResult<()> {
        let name = name.trim();
        if DEFAULT_HABITS.iter().any(|h| *h == name) {
            return Err(FlowError::Validation(format!(
                "'{}' is a default habit and cannot be removed",
                name
            )));
        }

        let mut custom = self.storage.habits.custom_habits()?;
        let before = custom.len();
        custom.retain(|h| h != name);
        if custom.len() == before {
            return Err(FlowError::habit_not_found(name));
        }

        self.storage.habits.put_custom_habits(&custom)
    }

    /// The user's custom habit names
    pub fn custom_habits(&self) -> FlowResult<Vec<String>> {
        self.storage.habits.custom_habits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlowPaths;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn service_fixture() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FlowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn week_key() -> WeekKey {
        WeekKey::for_date(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap())
    }

    #[test]
    fn test_toggle_persists() {
        let (_tmp, storage) = service_fixture();
        let service = HabitService::new(&storage);
        let key = week_key();

        service.toggle(&key, "Exercise", 1).unwrap();

        let reloaded = service.week(&key).unwrap();
        assert!(reloaded.row("Exercise")[1]);
    }

    #[test]
    fn test_double_toggle_restores_record() {
        let (_tmp, storage) = service_fixture();
        let service = HabitService::new(&storage);
        let key = week_key();
        let before = service.week(&key).unwrap().to_stored();

        service.toggle(&key, "Exercise", 1).unwrap();
        service.toggle(&key, "Exercise", 1).unwrap();

        assert_eq!(service.week(&key).unwrap().to_stored(), before);
    }

    #[test]
    fn test_toggle_rejects_bad_day() {
        let (_tmp, storage) = service_fixture();
        let service = HabitService::new(&storage);
        let err = service.toggle(&week_key(), "Exercise", 7).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_toggle_unknown_habit() {
        let (_tmp, storage) = service_fixture();
        let service = HabitService::new(&storage);
        let err = service.toggle(&week_key(), "Juggling", 0).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_and_remove_custom_habit() {
        let (_tmp, storage) = service_fixture();
        let service = HabitService::new(&storage);

        service.add_habit("Read 20 pages").unwrap();
        assert!(service
            .week(&week_key())
            .unwrap()
            .contains("Read 20 pages"));

        service.remove_habit("Read 20 pages").unwrap();
        assert!(service.custom_habits().unwrap().is_empty());
    }

    #[test]
    fn test_add_rejects_blank_and_duplicate() {
        let (_tmp, storage) = service_fixture();
        let service = HabitService::new(&storage);

        assert!(service.add_habit("  ").unwrap_err().is_validation());
        assert!(matches!(
            service.add_habit("Exercise").unwrap_err(),
            FlowError::Duplicate { .. }
        ));

        service.add_habit("Reading").unwrap();
        assert!(matches!(
            service.add_habit("Reading").unwrap_err(),
            FlowError::Duplicate { .. }
        ));
    }

    #[test]
    fn test_remove_default_habit_rejected() {
        let (_tmp, storage) = service_fixture();
        let service = HabitService::new(&storage);
        assert!(service.remove_habit("Exercise").unwrap_err().is_validation());
    }

    #[test]
    fn test_removed_habit_keeps_recorded_history() {
        let (_tmp, storage) = service_fixture();
        let service = HabitService::new(&storage);
        let key = week_key();

        service.add_habit("Reading").unwrap();
        service.toggle(&key, "Reading", 0).unwrap();
        service.remove_habit("Reading").unwrap();

        // The stored week still carries the orphaned habit's row
        let week = service.week(&key).unwrap();
        assert_eq!(week.habit_total("Reading"), 1);
    }
}
