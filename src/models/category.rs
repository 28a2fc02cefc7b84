//! Budget category model
//!
//! Categories are keyed by name and carry a display emoji and a monthly
//! budget. "Savings" is the one distinguished category: its budget is
//! derived from income rather than set directly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::amount::Amount;

/// Name of the distinguished auto-computed category
pub const SAVINGS: &str = "Savings";

/// A monthly budget category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Category name, unique within a month
    pub name: String,

    /// Display emoji
    pub emoji: String,

    /// Budget for the month
    pub budget: Amount,
}

impl BudgetCategory {
    pub fn new(name: impl Into<String>, emoji: impl Into<String>, budget: Amount) -> Self {
        Self {
            name: name.into(),
            emoji: emoji.into(),
            budget,
        }
    }

    pub fn is_savings(&self) -> bool {
        self.name == SAVINGS
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji, self.name)
    }
}

/// The seed category set shown when no record exists for a month
pub fn default_categories() -> Vec<BudgetCategory> {
    vec![
        BudgetCategory::new("Cook items", "🍲", Amount::new(800)),
        BudgetCategory::new("Outside eating", "🍽️", Amount::new(2000)),
        BudgetCategory::new("Snacks / chai", "☕", Amount::new(500)),
        BudgetCategory::new("Travel", "🚌", Amount::new(1000)),
        BudgetCategory::new("Personal care", "🧴", Amount::new(500)),
        BudgetCategory::new("College / study", "📚", Amount::new(500)),
        BudgetCategory::new(SAVINGS, "💰", Amount::zero()),
    ]
}

/// Sum of the default budgets excluding Savings
///
/// This is the fixed baseline the Savings auto-computation subtracts from,
/// deliberately independent of any budgets the user has since edited.
pub fn default_fixed_budget() -> Amount {
    default_categories()
        .iter()
        .filter(|c| !c.is_savings())
        .map(|c| c.budget)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories() {
        let categories = default_categories();
        assert_eq!(categories.len(), 7);
        assert_eq!(categories[0].name, "Cook items");
        assert_eq!(categories[0].budget, Amount::new(800));
        assert!(categories.last().unwrap().is_savings());
        assert_eq!(categories.last().unwrap().budget, Amount::zero());
    }

    #[test]
    fn test_default_fixed_budget() {
        // 800 + 2000 + 500 + 1000 + 500 + 500
        assert_eq!(default_fixed_budget(), Amount::new(5300));
    }

    #[test]
    fn test_display() {
        let category = BudgetCategory::new("Travel", "🚌", Amount::new(1000));
        assert_eq!(category.to_string(), "🚌 Travel");
    }

    #[test]
    fn test_serialization_shape() {
        let category = BudgetCategory::new("Travel", "🚌", Amount::new(1000));
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["name"], "Travel");
        assert_eq!(json["emoji"], "🚌");
        assert_eq!(json["budget"], 1000);
    }
}
