//! Service layer for Focus Flow
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, persistence sequencing and the history window.

pub mod habits;
pub mod history;
pub mod money;

pub use habits::HabitService;
pub use history::{HistoryService, MonthReport};
pub use money::MoneyService;
