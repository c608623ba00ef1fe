//! Expense record operations

use rusqlite::params;

use super::Database;
use crate::error::Result;
use crate::models::ExpenseRecord;

impl Database {
    /// Insert an expense record, returning its row id
    pub fn insert_expense(&self, record: &ExpenseRecord) -> Result<i64> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO expenses (date, item, price, category) VALUES (?1, ?2, ?3, ?4)",
            params![record.date, record.item, record.price, record.category],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// All expense records in insertion order
    pub fn list_expenses(&self) -> Result<Vec<ExpenseRecord>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT date, item, price, category FROM expenses ORDER BY id")?;

        let records = stmt
            .query_map([], |row| {
                Ok(ExpenseRecord {
                    date: row.get(0)?,
                    item: row.get(1)?,
                    price: row.get(2)?,
                    category: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    pub fn count_expenses(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count)
    }
}
