//! Focus Flow - terminal habit checklist and monthly budget tracker
//!
//! This library provides the core functionality for the Focus Flow tracker.
//! Habits are recorded per week (one checkbox per habit per day, Monday to
//! Sunday) and money per calendar month (income, budget categories, expenses),
//! with derived completion and spending statistics computed on demand.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (period keys, habit weeks, categories, expenses)
//! - `storage`: JSON file storage layer, one file per (store, period) pair
//! - `services`: Business logic layer (habit store, money store, history)
//! - `display`: Terminal output formatting
//! - `cli`: Command definitions and handlers
//! - `setup`: First-run greeting flow

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod setup;
pub mod storage;

pub use error::{FlowError, FlowResult};
