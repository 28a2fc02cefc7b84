//! Monthly money state and derived budget statistics
//!
//! One `MonthlyMoneyState` holds everything recorded for a calendar month:
//! the income figure, the category list and the expense log. All spending
//! statistics are pure derivations over this struct, shared by the live
//! money store and the history aggregator so the formulas exist once.

use std::fmt;

use crate::models::amount::Amount;
use crate::models::category::BudgetCategory;
use crate::models::expense::Expense;

/// Spend-to-budget alert classification for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    /// Under 70% of budget
    Safe,
    /// 70% to 89%
    Warning,
    /// 90% to 99%
    Danger,
    /// 100% or more
    Exceeded,
}

impl AlertLevel {
    /// Classify a percent-of-budget value
    pub fn for_percent(percent: i64) -> Self {
        if percent >= 100 {
            Self::Exceeded
        } else if percent >= 90 {
            Self::Danger
        } else if percent >= 70 {
            Self::Warning
        } else {
            Self::Safe
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Exceeded => "exceeded",
        };
        write!(f, "{}", label)
    }
}

/// Everything recorded for one calendar month
#[derive(Debug, Clone, Default)]
pub struct MonthlyMoneyState {
    pub income: Amount,
    pub categories: Vec<BudgetCategory>,
    pub expenses: Vec<Expense>,
}

impl MonthlyMoneyState {
    pub fn category(&self, name: &str) -> Option<&BudgetCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Total spent against one category
    pub fn category_spent(&self, name: &str) -> Amount {
        self.expenses
            .iter()
            .filter(|e| e.category == name)
            .map(|e| e.amount)
            .sum()
    }

    /// Budget minus spent for one category; zero for an unknown category
    pub fn category_remaining(&self, name: &str) -> Amount {
        match self.category(name) {
            Some(category) => category.budget - self.category_spent(name),
            None => Amount::zero(),
        }
    }

    /// Rounded percent-of-budget for one category
    ///
    /// Zero for an unknown category or a zero budget.
    pub fn category_percent(&self, name: &str) -> i64 {
        match self.category(name) {
            Some(category) => self.category_spent(name).percent_of(category.budget),
            None => 0,
        }
    }

    /// Alert classification for one category
    pub fn alert_level(&self, name: &str) -> AlertLevel {
        AlertLevel::for_percent(self.category_percent(name))
    }

    /// Sum of all category budgets
    pub fn total_budget(&self) -> Amount {
        self.categories.iter().map(|c| c.budget).sum()
    }

    /// Sum of all expenses
    pub fn total_spent(&self) -> Amount {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Income minus total spent
    pub fn total_remaining(&self) -> Amount {
        self.income - self.total_spent()
    }

    /// Rounded average daily spend given the current day of the month
    pub fn daily_average(&self, day_of_month: u32) -> Amount {
        if day_of_month == 0 {
            return Amount::zero();
        }
        let spent = self.total_spent().units();
        let days = day_of_month as i64;
        Amount::new((spent + days / 2) / days)
    }

    /// The category with the highest spend, if anything was spent at all
    pub fn highest_category(&self) -> Option<&BudgetCategory> {
        let mut highest: Option<&BudgetCategory> = None;
        let mut max = Amount::zero();
        for category in &self.categories {
            let spent = self.category_spent(&category.name);
            if spent > max {
                max = spent;
                highest = Some(category);
            }
        }
        highest
    }

    /// Whether anything was recorded this month
    pub fn has_data(&self) -> bool {
        self.income.is_positive() || !self.expenses.is_empty()
    }
}
