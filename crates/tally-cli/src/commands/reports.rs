//! Report command implementations

use std::fmt::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tally_core::models::SpendingReport;
use tally_core::{ExpenseService, ExpenseStore};

use super::truncate;

pub fn cmd_report<S: ExpenseStore>(
    service: &ExpenseService<S>,
    json: bool,
    today: NaiveDate,
) -> Result<()> {
    let report = service
        .report(today)
        .context("Failed to build spending report")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report, today));
    }

    Ok(())
}

/// Human-readable rendering of a report
pub fn format_report(report: &SpendingReport, today: NaiveDate) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, report, today);
    out
}

fn write_report(out: &mut String, report: &SpendingReport, today: NaiveDate) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "📊 Spending Report (as of {})", today)?;
    writeln!(out, "   ─────────────────────────────────────────────")?;

    if report.spending_data.is_empty() {
        writeln!(out, "   No expenses recorded yet.")?;
    } else {
        writeln!(out, "   Total spent:        {:>10.2}", report.total_spent)?;
    }

    writeln!(out)?;
    writeln!(out, "💰 Budget (this month)")?;
    writeln!(out, "   Budget:             {:>10.2}", report.current_budget)?;
    writeln!(out, "   Remaining:          {:>10.2}", report.budget_remaining)?;
    writeln!(out, "   Used:               {:>9.1}%", report.budget_percentage)?;
    writeln!(out, "   Daily rate:         {:>10.2}", report.daily_spending_rate)?;
    writeln!(out, "   Projected:          {:>10.2}", report.projected_cost)?;

    if report.spending_data.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "🏆 Top Items")?;
    writeln!(out, "   {:25} │ {:>10}", "Item", "Amount")?;
    writeln!(out, "   ──────────────────────────┼───────────")?;
    for item in &report.top_5_items {
        writeln!(out, "   {:25} │ {:>10.2}", truncate(&item.item, 25), item.amount)?;
    }
    if let Some(ref item) = report.highest_spent_item.item {
        writeln!(
            out,
            "   Largest single expense: {} ({:.2})",
            item, report.highest_spent_item.amount
        )?;
    }

    writeln!(out)?;
    writeln!(out, "🗂  Categories")?;
    writeln!(out, "   {:25} │ {:>10}", "Category", "Amount")?;
    writeln!(out, "   ──────────────────────────┼───────────")?;
    for cat in &report.category_breakdown {
        writeln!(out, "   {:25} │ {:>10.2}", truncate(&cat.category, 25), cat.amount)?;
    }
    writeln!(
        out,
        "   Highest: {} ({:.2})",
        report.highest_spending_category.category, report.highest_spending_category.amount
    )?;

    writeln!(out)?;
    writeln!(out, "📅 Monthly")?;
    for (month, amount) in &report.monthly_spending {
        writeln!(out, "   {:10} │ {:>10.2}", month, amount)?;
    }

    Ok(())
}
