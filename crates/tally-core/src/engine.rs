//! Aggregation and projection engine
//!
//! Turns a flat list of expense records plus the budget entries into a
//! [`SpendingReport`]. Everything here is pure and synchronous: the caller
//! supplies a snapshot of the store and the reference date.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{
    BudgetEntry, CategoryAmount, ExpenseRecord, HighestSpentItem, ItemAmount, SpendingReport,
    SpendingTrend, TOP_ITEMS_LIMIT,
};

/// Label reported as the highest-spending category when there are no records
pub const NO_CATEGORY: &str = "None";

/// Running sums keyed by label, remembering first-encounter order
#[derive(Debug, Clone, Default)]
pub struct Totals {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl Totals {
    pub fn add(&mut self, key: &str, amount: f64) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += amount,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), amount));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v).sum()
    }

    /// Entry with the largest total; ties keep the earliest entry
    pub fn max(&self) -> Option<(&str, f64)> {
        self.iter().fold(None, |best, (k, v)| match best {
            Some((_, best_v)) if v <= best_v => best,
            _ => Some((k, v)),
        })
    }

    /// Up to `n` entries, largest first; equal totals keep encounter order
    pub fn ranked(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        // sort_by is stable, so ties stay in encounter order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    fn to_sorted_map(&self) -> BTreeMap<String, f64> {
        self.entries.iter().cloned().collect()
    }
}

/// Everything derived from a single pass over the records
#[derive(Debug, Clone, Default)]
pub struct SpendingAggregates {
    pub by_date: Totals,
    pub by_item: Totals,
    pub by_category: Totals,
    pub by_month: Totals,
    pub highest_spent_item: HighestSpentItem,
    pub total_spent: f64,
}

impl SpendingAggregates {
    /// Fold records in input order
    ///
    /// Fails on the first record whose price does not parse; no partial result
    /// is returned.
    pub fn from_records(records: &[ExpenseRecord]) -> Result<Self> {
        let mut agg = Self::default();

        for record in records {
            let price = record.parse_price()?;
            let category = record.category_or_default();

            agg.by_date.add(&record.date, price);
            agg.by_item.add(&record.item, price);
            agg.by_category.add(category, price);
            agg.by_month.add(record.month_key(), price);

            if price > agg.highest_spent_item.amount {
                agg.highest_spent_item = HighestSpentItem {
                    item: Some(record.item.clone()),
                    amount: price,
                };
            }

            agg.total_spent += price;
        }

        Ok(agg)
    }

    pub fn top_items(&self) -> Vec<ItemAmount> {
        self.by_item
            .ranked(TOP_ITEMS_LIMIT)
            .into_iter()
            .map(|(item, amount)| ItemAmount {
                item: item.to_string(),
                amount,
            })
            .collect()
    }

    pub fn highest_spending_category(&self) -> CategoryAmount {
        match self.by_category.max() {
            Some((category, amount)) => CategoryAmount {
                category: category.to_string(),
                amount,
            },
            None => CategoryAmount {
                category: NO_CATEGORY.to_string(),
                amount: 0.0,
            },
        }
    }

    pub fn category_breakdown(&self) -> Vec<CategoryAmount> {
        self.by_category
            .iter()
            .map(|(category, amount)| CategoryAmount {
                category: category.to_string(),
                amount,
            })
            .collect()
    }

    /// Total for a `YYYY-MM` month, zero when nothing was spent
    pub fn month_total(&self, month_key: &str) -> f64 {
        self.by_month.get(month_key).unwrap_or(0.0)
    }
}

/// Pick the effective budget: first entry that parses, else zero
///
/// Depends on scan order when several entries exist.
pub fn resolve_budget(entries: &[BudgetEntry]) -> f64 {
    entries
        .iter()
        .find_map(BudgetEntry::amount)
        .unwrap_or(0.0)
}

/// The calendar month containing a reference date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWindow {
    /// `YYYY-MM`
    pub month_key: String,
    /// Day of month of the reference date (1-indexed)
    pub days_passed: u32,
    pub days_in_month: u32,
}

impl MonthWindow {
    pub fn containing(today: NaiveDate) -> Result<Self> {
        let first = today.with_day(1).ok_or_else(|| {
            Error::InvalidData(format!("no first day of month for {}", today))
        })?;
        let next_first = if today.month() == 12 {
            NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
        }
        .ok_or_else(|| Error::InvalidData(format!("no month after {}", today)))?;

        Ok(Self {
            month_key: today.format("%Y-%m").to_string(),
            days_passed: today.day(),
            days_in_month: (next_first - first).num_days() as u32,
        })
    }
}

/// Linear end-of-month extrapolation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Projection {
    pub daily_rate: f64,
    pub projected_cost: f64,
}

impl Projection {
    pub fn from_month_total(total: f64, window: &MonthWindow) -> Self {
        if window.days_passed == 0 {
            return Self::default();
        }
        let daily_rate = total / f64::from(window.days_passed);
        Self {
            daily_rate,
            projected_cost: daily_rate * f64::from(window.days_in_month),
        }
    }
}

/// Budget remaining and percentage used for the current month
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BudgetStatus {
    /// Negative when overspent
    pub remaining: f64,
    /// Zero when no budget is set
    pub percentage: f64,
}

impl BudgetStatus {
    pub fn compute(budget: f64, spent: f64) -> Self {
        Self {
            remaining: budget - spent,
            percentage: if budget > 0.0 {
                (spent / budget) * 100.0
            } else {
                0.0
            },
        }
    }
}

/// Build the full report from a store snapshot
pub fn build_report(
    records: &[ExpenseRecord],
    budget_entries: &[BudgetEntry],
    today: NaiveDate,
) -> Result<SpendingReport> {
    let agg = SpendingAggregates::from_records(records)?;
    let current_budget = resolve_budget(budget_entries);

    let window = MonthWindow::containing(today)?;
    let month_total = agg.month_total(&window.month_key);
    let projection = Projection::from_month_total(month_total, &window);
    let status = BudgetStatus::compute(current_budget, month_total);

    debug!(
        records = records.len(),
        items = agg.by_item.len(),
        categories = agg.by_category.len(),
        month = %window.month_key,
        month_total,
        "Built spending report"
    );

    Ok(SpendingReport {
        spending_data: agg.by_date.to_sorted_map(),
        highest_spent_item: agg.highest_spent_item.clone(),
        top_5_items: agg.top_items(),
        monthly_spending: agg.by_month.to_sorted_map(),
        projected_cost: projection.projected_cost,
        current_budget,
        budget_remaining: status.remaining,
        budget_percentage: status.percentage,
        highest_spending_category: agg.highest_spending_category(),
        category_breakdown: agg.category_breakdown(),
        spending_trend: SpendingTrend::Steady,
        daily_spending_rate: projection.daily_rate,
        total_spent: agg.total_spent,
    })
}
