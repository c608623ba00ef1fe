//! Tally Core Library
//!
//! Shared functionality for the Tally expense tracker:
//! - Domain models and the report schema
//! - Aggregation and projection engine
//! - Record store trait and its SQLite implementation
//! - Expense service combining store and engine

pub mod db;
pub mod engine;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use db::Database;
pub use engine::{build_report, resolve_budget, BudgetStatus, MonthWindow, Projection};
pub use error::{Error, Result};
pub use models::{BudgetEntry, ExpenseRecord, NewExpense, SpendingReport};
pub use service::ExpenseService;
pub use store::ExpenseStore;
