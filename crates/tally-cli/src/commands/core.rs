//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` / `open_service` - Shared utilities to open the database
//! - `today` - Local reference date for reports and defaults
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tally_core::{Database, ExpenseService};

/// Open (and migrate) the database at `db_path`
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path must be valid UTF-8")?;
    Database::new(path_str).context("Failed to open database")
}

pub fn open_service(db_path: &Path) -> Result<ExpenseService<Database>> {
    Ok(ExpenseService::new(open_db(db_path)?))
}

/// Today's date on the local clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path)?;
    let expenses = db.count_expenses()?;

    println!("✅ Database ready ({} expenses recorded)", expenses);
    println!();
    println!("Next steps:");
    println!("  1. Set a budget: tally budget set 500");
    println!("  2. Add an expense: tally add --item Coffee --price 4.50 --category Food");
    println!("  3. Start web API: tally serve");

    Ok(())
}
