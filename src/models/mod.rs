//! Core data models for Focus Flow

pub mod amount;
pub mod category;
pub mod expense;
pub mod habit;
pub mod money;
pub mod period;

pub use amount::Amount;
pub use category::{default_categories, default_fixed_budget, BudgetCategory, SAVINGS};
pub use expense::{Expense, ExpenseId};
pub use habit::{HabitWeek, DAYS_PER_WEEK, DAY_NAMES, DEFAULT_HABITS};
pub use money::{AlertLevel, MonthlyMoneyState};
pub use period::{MonthKey, WeekKey};
