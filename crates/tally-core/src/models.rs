//! Domain models for Tally

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Category assigned to records stored without one
pub const DEFAULT_CATEGORY: &str = "Other";

/// Storage and wire format for expense dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of entries kept in the top items ranking
pub const TOP_ITEMS_LIMIT: usize = 5;

/// Parse a numeric-capable string into a finite amount
///
/// Surrounding whitespace is ignored. `NaN` and infinities are rejected.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A persisted expense entry
///
/// `price` keeps the textual form it was stored in; it is only turned into a
/// number when a report is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub date: String,
    pub item: String,
    pub price: String,
    pub category: Option<String>,
}

impl ExpenseRecord {
    /// Category label, falling back to "Other"
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// `YYYY-MM` month key (the first 7 characters of the date)
    pub fn month_key(&self) -> &str {
        match self.date.char_indices().nth(7) {
            Some((idx, _)) => &self.date[..idx],
            None => &self.date,
        }
    }

    /// Parse the stored price, failing if it is not a finite number
    pub fn parse_price(&self) -> Result<f64> {
        parse_amount(&self.price).ok_or_else(|| {
            Error::Computation(format!(
                "could not convert price {:?} of item {:?} to a number",
                self.price, self.item
            ))
        })
    }
}

/// A stored budget row
///
/// Only `actual-budget` matters; it may be missing or unparsable, in which case
/// the row is skipped during budget resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetEntry {
    pub id: i64,
    #[serde(rename = "actual-budget")]
    pub actual_budget: Option<String>,
}

impl BudgetEntry {
    pub fn amount(&self) -> Option<f64> {
        self.actual_budget.as_deref().and_then(parse_amount)
    }
}

/// Price as accepted on the write path: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    pub fn to_amount(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Number(_) => None,
            Self::Text(s) => parse_amount(s),
        }
    }
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PriceInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Candidate record submitted for persistence
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewExpense {
    pub item: Option<String>,
    pub price: Option<PriceInput>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl NewExpense {
    pub fn new(item: impl Into<String>, price: impl Into<PriceInput>) -> Self {
        Self {
            item: Some(item.into()),
            price: Some(price.into()),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Validate and normalize into a storable record
    ///
    /// Missing category becomes "Other" and missing date becomes `today`.
    pub fn into_record(self, today: NaiveDate) -> Result<ExpenseRecord> {
        let item = self
            .item
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Validation("Invalid item or price: item is required".into()))?;

        let price = self
            .price
            .as_ref()
            .and_then(PriceInput::to_amount)
            .filter(|p| *p > 0.0)
            .ok_or_else(|| {
                Error::Validation("Invalid item or price: price must be a positive number".into())
            })?;

        let category = self
            .category
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        let date = match self.date.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map_err(|_| {
                    Error::Validation(format!("Invalid date {:?} (use YYYY-MM-DD)", raw))
                })?
                .format(DATE_FORMAT)
                .to_string(),
            None => today.format(DATE_FORMAT).to_string(),
        };

        Ok(ExpenseRecord {
            date,
            item,
            price: price.to_string(),
            category: Some(category),
        })
    }
}

/// Spend attributed to one item label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAmount {
    pub item: String,
    pub amount: f64,
}

/// The single most expensive record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HighestSpentItem {
    pub item: Option<String>,
    pub amount: f64,
}

/// Spend attributed to one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: f64,
}

/// Spending trend label
///
/// Only `steady` exists; no trend detection is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpendingTrend {
    #[default]
    Steady,
}

/// Consolidated analytics summary returned by the read path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingReport {
    /// Date (`YYYY-MM-DD`) to summed price
    pub spending_data: BTreeMap<String, f64>,
    pub highest_spent_item: HighestSpentItem,
    pub top_5_items: Vec<ItemAmount>,
    /// Month (`YYYY-MM`) to summed price
    pub monthly_spending: BTreeMap<String, f64>,
    pub projected_cost: f64,
    pub current_budget: f64,
    pub budget_remaining: f64,
    pub budget_percentage: f64,
    pub highest_spending_category: CategoryAmount,
    pub category_breakdown: Vec<CategoryAmount>,
    pub spending_trend: SpendingTrend,
    pub daily_spending_rate: f64,
    pub total_spent: f64,
}
