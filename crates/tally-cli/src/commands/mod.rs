//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `budget` - Budget commands (show, set)
//! - `core` - Core commands (init) and shared utilities (open_db, open_service)
//! - `expenses` - Expense entry (add)
//! - `reports` - Spending report output
//! - `serve` - Web server command

pub mod budget;
pub mod core;
pub mod expenses;
pub mod reports;
pub mod serve;

// Re-export command functions for main.rs
pub use budget::*;
pub use core::*;
pub use expenses::*;
pub use reports::*;
pub use serve::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
