//! Expense command implementations

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tally_core::models::NewExpense;
use tally_core::{ExpenseService, ExpenseStore};

pub fn cmd_add<S: ExpenseStore>(
    service: &ExpenseService<S>,
    item: &str,
    price: &str,
    category: Option<&str>,
    date: Option<&str>,
    today: NaiveDate,
) -> Result<()> {
    let new = NewExpense {
        item: Some(item.to_string()),
        price: Some(price.into()),
        category: category.map(str::to_string),
        date: date.map(str::to_string),
    };

    let record = service
        .add_expense(new, today)
        .context("Failed to add expense")?;

    println!(
        "✅ Added {} ({}) for {} on {}",
        record.item,
        record.category_or_default(),
        record.price,
        record.date
    );

    Ok(())
}
