//! Money repository for per-month JSON storage
//!
//! A month is stored as three files, one per storage key: income
//! (`money-income-<YYYY-MM>.json`), categories and expenses. There is no
//! cross-file transaction; callers that touch two keys write them one
//! after the other.

use crate::config::paths::{FlowPaths, MONEY_PREFIX};
use crate::error::FlowResult;
use crate::models::{
    default_categories, Amount, BudgetCategory, Expense, MonthKey, MonthlyMoneyState,
};

use super::file_io::{list_record_keys, read_json_opt, remove_matching, write_json_atomic};

/// Repository for monthly money persistence
pub struct MoneyRepository {
    paths: FlowPaths,
}

impl MoneyRepository {
    pub fn new(paths: FlowPaths) -> Self {
        Self { paths }
    }

    /// Load a month for the live store
    ///
    /// A month whose category record is missing or unreadable starts from
    /// the default category set; an explicitly stored empty list stays
    /// empty. Income and expenses default to zero and empty.
    pub fn month(&self, key: &MonthKey) -> FlowResult<MonthlyMoneyState> {
        let (income, categories, expenses) = self.read_records(key)?;
        Ok(MonthlyMoneyState {
            income: income.unwrap_or_default(),
            categories: categories.unwrap_or_else(default_categories),
            expenses: expenses.unwrap_or_default(),
        })
    }

    /// Load exactly what was recorded for a month, without seeding
    ///
    /// The history aggregator uses this: a month that was never opened in
    /// the live store shows no categories rather than the default set.
    pub fn month_raw(&self, key: &MonthKey) -> FlowResult<MonthlyMoneyState> {
        let (income, categories, expenses) = self.read_records(key)?;
        Ok(MonthlyMoneyState {
            income: income.unwrap_or_default(),
            categories: categories.unwrap_or_default(),
            expenses: expenses.unwrap_or_default(),
        })
    }

    /// The three stored records of a month; `None` means absent or unreadable
    #[allow(clippy::type_complexity)]
    fn read_records(
        &self,
        key: &MonthKey,
    ) -> FlowResult<(Option<Amount>, Option<Vec<BudgetCategory>>, Option<Vec<Expense>>)> {
        Ok((
            read_json_opt(self.paths.money_income_file(key))?,
            read_json_opt(self.paths.money_categories_file(key))?,
            read_json_opt(self.paths.money_expenses_file(key))?,
        ))
    }

    /// Persist a month's income figure
    pub fn put_income(&self, key: &MonthKey, income: Amount) -> FlowResult<()> {
        write_json_atomic(self.paths.money_income_file(key), &income)
    }

    /// Persist a month's category list
    pub fn put_categories(&self, key: &MonthKey, categories: &[BudgetCategory]) -> FlowResult<()> {
        write_json_atomic(self.paths.money_categories_file(key), &categories)
    }

    /// Persist a month's expense list
    pub fn put_expenses(&self, key: &MonthKey, expenses: &[Expense]) -> FlowResult<()> {
        write_json_atomic(self.paths.money_expenses_file(key), &expenses)
    }

    /// Keys of every month with any stored money record, ascending
    pub fn stored_months(&self) -> FlowResult<Vec<MonthKey>> {
        let mut months = Vec::new();
        for file in ["money-income-", "money-categories-", "money-expenses-"] {
            for key in list_record_keys(self.paths.data_dir(), file)? {
                if let Ok(month) = MonthKey::parse(&key) {
                    if !months.contains(&month) {
                        months.push(month);
                    }
                }
            }
        }
        months.sort();
        Ok(months)
    }

    /// Delete every money record; returns the count of files removed
    pub fn clear_all(&self) -> FlowResult<usize> {
        remove_matching(self.paths.data_dir(), MONEY_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn repo() -> (TempDir, MoneyRepository) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FlowPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, MoneyRepository::new(paths))
    }

    fn month_key() -> MonthKey {
        MonthKey::new(2026, 8).unwrap()
    }

    #[test]
    fn test_unstored_month_gets_default_categories() {
        let (_tmp, repo) = repo();
        let state = repo.month(&month_key()).unwrap();
        assert_eq!(state.categories.len(), 7);
        assert_eq!(state.income, Amount::zero());
        assert!(state.expenses.is_empty());
    }

    #[test]
    fn test_month_raw_does_not_seed() {
        let (_tmp, repo) = repo();
        let state = repo.month_raw(&month_key()).unwrap();
        assert!(state.categories.is_empty());
    }

    #[test]
    fn test_income_round_trip() {
        let (_tmp, repo) = repo();
        let key = month_key();
        repo.put_income(&key, Amount::new(10000)).unwrap();
        assert_eq!(repo.month(&key).unwrap().income, Amount::new(10000));
    }

    #[test]
    fn test_stored_empty_category_list_stays_empty() {
        let (_tmp, repo) = repo();
        let key = month_key();
        repo.put_categories(&key, &[]).unwrap();
        // An explicitly stored empty list is not re-seeded
        assert!(repo.month(&key).unwrap().categories.is_empty());
    }

    #[test]
    fn test_expenses_round_trip() {
        let (_tmp, repo) = repo();
        let key = month_key();
        let expense = Expense::new(
            Amount::new(500),
            "Cook items",
            NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
        )
        .with_note("weekly groceries");

        repo.put_expenses(&key, &[expense.clone()]).unwrap();

        let state = repo.month(&key).unwrap();
        assert_eq!(state.expenses, vec![expense]);
    }

    #[test]
    fn test_corrupt_categories_file_reseeds_defaults() {
        let (_tmp, repo) = repo();
        let key = month_key();
        repo.paths.ensure_directories().unwrap();
        std::fs::write(repo.paths.money_categories_file(&key), "{broken").unwrap();

        // An unreadable record is treated like a missing one, not stored-empty
        let state = repo.month(&key).unwrap();
        assert_eq!(state.categories.len(), 7);
        assert!(state.categories.last().unwrap().is_savings());

        // The raw read path stays unseeded
        assert!(repo.month_raw(&key).unwrap().categories.is_empty());
    }

    #[test]
    fn test_corrupt_income_reads_as_zero() {
        let (_tmp, repo) = repo();
        let key = month_key();
        repo.paths.ensure_directories().unwrap();
        std::fs::write(repo.paths.money_income_file(&key), "oops").unwrap();

        assert_eq!(repo.month(&key).unwrap().income, Amount::zero());
    }

    #[test]
    fn test_stored_months_deduplicates() {
        let (_tmp, repo) = repo();
        let key = month_key();
        repo.put_income(&key, Amount::new(1)).unwrap();
        repo.put_expenses(&key, &[]).unwrap();
        repo.put_income(&key.prev(), Amount::new(1)).unwrap();

        assert_eq!(repo.stored_months().unwrap(), vec![key.prev(), key]);
    }

    #[test]
    fn test_clear_all() {
        let (_tmp, repo) = repo();
        let key = month_key();
        repo.put_income(&key, Amount::new(1)).unwrap();
        repo.put_categories(&key, &default_categories()).unwrap();

        assert_eq!(repo.clear_all().unwrap(), 2);
        assert!(repo.stored_months().unwrap().is_empty());
    }
}
