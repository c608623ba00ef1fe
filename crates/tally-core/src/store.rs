//! Record store abstraction
//!
//! The engine never talks to storage directly; the service reads a snapshot
//! through [`ExpenseStore`] and hands it to the engine.

use tracing::debug;

use crate::db::Database;
use crate::error::Result;
use crate::models::{BudgetEntry, ExpenseRecord};

/// Storage collaborator for expense records and budget entries
pub trait ExpenseStore: Send + Sync {
    /// Full snapshot of stored records
    fn scan_all_records(&self) -> Result<Vec<ExpenseRecord>>;

    /// All budget entries in scan order
    fn scan_all_budget_entries(&self) -> Result<Vec<BudgetEntry>>;

    fn put_record(&self, record: &ExpenseRecord) -> Result<()>;

    /// Replace the effective budget value
    fn set_budget(&self, amount: f64) -> Result<()>;
}

impl ExpenseStore for Database {
    fn scan_all_records(&self) -> Result<Vec<ExpenseRecord>> {
        let records = self.list_expenses()?;
        debug!(count = records.len(), "Scanned expense records");
        Ok(records)
    }

    fn scan_all_budget_entries(&self) -> Result<Vec<BudgetEntry>> {
        let entries = self.list_budget_entries()?;
        debug!(count = entries.len(), "Scanned budget entries");
        Ok(entries)
    }

    fn put_record(&self, record: &ExpenseRecord) -> Result<()> {
        self.insert_expense(record)?;
        Ok(())
    }

    fn set_budget(&self, amount: f64) -> Result<()> {
        Database::set_budget(self, amount)
    }
}
