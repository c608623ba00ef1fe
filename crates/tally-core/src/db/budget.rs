//! Budget entry operations

use rusqlite::{params, OptionalExtension};

use super::Database;
use crate::error::Result;
use crate::models::BudgetEntry;

impl Database {
    /// All budget entries, oldest first
    pub fn list_budget_entries(&self) -> Result<Vec<BudgetEntry>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, actual_budget FROM budget_entries ORDER BY id")?;

        let entries = stmt
            .query_map([], |row| {
                Ok(BudgetEntry {
                    id: row.get(0)?,
                    actual_budget: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Append a raw budget entry, returning its row id
    pub fn add_budget_entry(&self, actual_budget: Option<&str>) -> Result<i64> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO budget_entries (actual_budget) VALUES (?1)",
            params![actual_budget],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Overwrite the first budget entry, creating it if the table is empty
    ///
    /// Writing to the first row keeps the scan-order budget rule pointing at the
    /// value that was just set.
    pub fn set_budget(&self, amount: f64) -> Result<()> {
        let conn = self.conn()?;
        let value = amount.to_string();

        let first: Option<i64> = conn
            .query_row(
                "SELECT id FROM budget_entries ORDER BY id LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;

        match first {
            Some(id) => {
                conn.execute(
                    "UPDATE budget_entries SET actual_budget = ?1, updated_at = CURRENT_TIMESTAMP WHERE id = ?2",
                    params![value, id],
                )?;
            }
            None => {
                conn.execute(
                    "INSERT INTO budget_entries (actual_budget) VALUES (?1)",
                    params![value],
                )?;
            }
        }

        Ok(())
    }
}
