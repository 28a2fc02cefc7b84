//! Money store service
//!
//! Business logic over the money repository: income, budgets and the
//! expense log for the active month. Spending statistics are derived on
//! `MonthlyMoneyState`.

use chrono::NaiveDate;

use crate::error::{FlowError, FlowResult};
use crate::models::{
    default_fixed_budget, Amount, Expense, ExpenseId, MonthKey, MonthlyMoneyState, SAVINGS,
};
use crate::storage::Storage;

/// Service for monthly money management
pub struct MoneyService<'a> {
    storage: &'a Storage,
}

impl<'a> MoneyService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load a month, seeded with the default categories if never stored
    pub fn month(&self, key: &MonthKey) -> FlowResult<MonthlyMoneyState> {
        self.storage.money.month(key)
    }

    /// Set the month's income and recompute the Savings budget
    ///
    /// Savings is always `max(0, income - sum of the DEFAULT non-Savings
    /// budgets)`. The baseline deliberately ignores budgets the user has
    /// since edited, so repeated calls with the same income always produce
    /// the same Savings figure. Income and categories are two separate
    /// record writes; there is no rollback between them.
    pub fn set_income(&self, key: &MonthKey, income: Amount) -> FlowResult<MonthlyMoneyState> {
        if income.is_negative() {
            return Err(FlowError::Validation("Income cannot be negative".into()));
        }

        self.storage.money.put_income(key, income)?;

        let mut state = self.storage.money.month(key)?;
        let savings = income.saturating_sub(default_fixed_budget());
        for category in &mut state.categories {
            if category.is_savings() {
                category.budget = savings;
            }
        }
        self.storage.money.put_categories(key, &state.categories)?;

        Ok(state)
    }

    /// Overwrite one category's budget
    pub fn update_budget(
        &self,
        key: &MonthKey,
        category: &str,
        amount: Amount,
    ) -> FlowResult<MonthlyMoneyState> {
        if amount.is_negative() {
            return Err(FlowError::Validation("Budget cannot be negative".into()));
        }

        let mut state = self.storage.money.month(key)?;
        let entry = state
            .categories
            .iter_mut()
            .find(|c| c.name == category)
            .ok_or_else(|| FlowError::category_not_found(category))?;
        entry.budget = amount;

        self.storage.money.put_categories(key, &state.categories)?;
        Ok(state)
    }

    /// Append an expense with a generated identifier
    ///
    /// The category is recorded as given and not checked against the live
    /// category list, so an expense can outlive the category it points at.
    pub fn add_expense(
        &self,
        key: &MonthKey,
        amount: Amount,
        category: &str,
        date: NaiveDate,
        note: Option<String>,
    ) -> FlowResult<Expense> {
        if !amount.is_positive() {
            return Err(FlowError::Validation("Amount must be positive".into()));
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(FlowError::Validation("Category cannot be empty".into()));
        }

        let mut expense = Expense::new(amount, category, date);
        if let Some(note) = note {
            expense = expense.with_note(note);
        }

        let mut state = self.storage.money.month(key)?;
        state.expenses.push(expense.clone());
        self.storage.money.put_expenses(key, &state.expenses)?;

        Ok(expense)
    }

    /// Remove exactly one expense by identifier
    pub fn delete_expense(&self, key: &MonthKey, id: ExpenseId) -> FlowResult<Expense> {
        let mut state = self.storage.money.month(key)?;
        let index = state
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| FlowError::expense_not_found(id.to_string()))?;

        let removed = state.expenses.remove(index);
        self.storage.money.put_expenses(key, &state.expenses)?;
        Ok(removed)
    }

    /// Find an expense whose id starts with the given prefix
    ///
    /// Listings show shortened ids; an ambiguous prefix is rejected.
    pub fn resolve_expense_id(&self, key: &MonthKey, prefix: &str) -> FlowResult<ExpenseId> {
        if let Some(id) = ExpenseId::parse(prefix) {
            return Ok(id);
        }

        let state = self.storage.money.month(key)?;
        let matches: Vec<ExpenseId> = state
            .expenses
            .iter()
            .filter(|e| e.id.to_string().starts_with(prefix))
            .map(|e| e.id)
            .collect();

        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(FlowError::expense_not_found(prefix)),
            _ => Err(FlowError::Validation(format!(
                "Expense id '{}' is ambiguous",
                prefix
            ))),
        }
    }
}
