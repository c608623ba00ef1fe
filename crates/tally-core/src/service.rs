//! Expense service: the read and write paths over an injected store

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::engine::{build_report, resolve_budget};
use crate::error::{Error, Result};
use crate::models::{ExpenseRecord, NewExpense, SpendingReport};
use crate::store::ExpenseStore;

/// Stateless service parameterized over its record store
///
/// Every call reads a fresh snapshot; nothing is cached between calls.
#[derive(Clone)]
pub struct ExpenseService<S> {
    store: S,
}

impl<S: ExpenseStore> ExpenseService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Build the spending report as of `today`
    pub fn report(&self, today: NaiveDate) -> Result<SpendingReport> {
        let records = self.store.scan_all_records()?;
        let budget_entries = self.store.scan_all_budget_entries()?;
        debug!(
            records = records.len(),
            budget_entries = budget_entries.len(),
            %today,
            "Loaded report snapshot"
        );
        build_report(&records, &budget_entries, today)
    }

    /// Validate and persist a new expense, returning the stored record
    pub fn add_expense(&self, new: NewExpense, today: NaiveDate) -> Result<ExpenseRecord> {
        let record = new.into_record(today)?;
        self.store.put_record(&record)?;
        info!(
            item = %record.item,
            price = %record.price,
            category = record.category_or_default(),
            date = %record.date,
            "Expense added"
        );
        Ok(record)
    }

    /// Effective budget under the first-valid-entry rule
    pub fn current_budget(&self) -> Result<f64> {
        let entries = self.store.scan_all_budget_entries()?;
        Ok(resolve_budget(&entries))
    }

    pub fn set_budget(&self, amount: f64) -> Result<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::Validation(format!(
                "Budget must be a non-negative number, got {}",
                amount
            )));
        }
        self.store.set_budget(amount)?;
        info!(amount, "Budget updated");
        Ok(())
    }
}
