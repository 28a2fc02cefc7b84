//! Expense model
//!
//! Expenses are append-only within a month and deletable by identifier.
//! The category field is a plain name reference: deleting a category does
//! not touch the expenses that pointed at it.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::amount::Amount;

/// Unique identifier for an expense (unique within a month)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s.trim()).ok().map(Self)
    }

    /// Short prefix for display in listings
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Generated identifier
    pub id: ExpenseId,

    /// Spent amount, always positive
    pub amount: Amount,

    /// Name of the category this expense counts against
    pub category: String,

    /// Day the expense was made
    pub date: NaiveDate,

    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Expense {
    pub fn new(amount: Amount, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            category: category.into(),
            date,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        if !note.trim().is_empty() {
            self.note = Some(note);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
    }

    #[test]
    fn test_new_expense_has_unique_id() {
        let a = Expense::new(Amount::new(100), "Travel", date());
        let b = Expense::new(Amount::new(100), "Travel", date());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_with_note_ignores_blank() {
        let expense = Expense::new(Amount::new(100), "Travel", date()).with_note("   ");
        assert!(expense.note.is_none());

        let expense = Expense::new(Amount::new(100), "Travel", date()).with_note("bus pass");
        assert_eq!(expense.note.as_deref(), Some("bus pass"));
    }

    #[test]
    fn test_id_round_trip() {
        let id = ExpenseId::new();
        assert_eq!(ExpenseId::parse(&id.to_string()), Some(id));
        assert!(ExpenseId::parse("not-a-uuid").is_none());
    }

    #[test]
    fn test_serialization_omits_empty_note() {
        let expense = Expense::new(Amount::new(100), "Travel", date());
        let json = serde_json::to_value(&expense).unwrap();
        assert!(json.get("note").is_none());
        assert_eq!(json["amount"], 100);
        assert_eq!(json["category"], "Travel");
        assert_eq!(json["date"], "2026-08-25");
    }
}
