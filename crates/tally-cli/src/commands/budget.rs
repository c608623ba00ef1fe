//! Budget command implementations

use anyhow::{Context, Result};
use tally_core::{ExpenseService, ExpenseStore};

pub fn cmd_budget_show<S: ExpenseStore>(service: &ExpenseService<S>) -> Result<()> {
    let budget = service.current_budget()?;
    if budget > 0.0 {
        println!("💰 Monthly budget: {:.2}", budget);
    } else {
        println!("💰 No budget set (use: tally budget set <amount>)");
    }
    Ok(())
}

pub fn cmd_budget_set<S: ExpenseStore>(service: &ExpenseService<S>, amount: f64) -> Result<()> {
    service
        .set_budget(amount)
        .context("Failed to set budget")?;
    println!("✅ Monthly budget set to {:.2}", amount);
    Ok(())
}
