//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track expenses against a monthly budget
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Expense tracker with spending analytics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "tally.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Record a new expense
    Add {
        /// What was bought
        #[arg(short, long)]
        item: String,

        /// Amount spent (must be positive)
        #[arg(short, long)]
        price: String,

        /// Category (defaults to "Other")
        #[arg(short, long)]
        category: Option<String>,

        /// Date of the expense, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show the spending report
    Report {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or set the monthly budget
    Budget {
        #[command(subcommand)]
        action: Option<BudgetAction>,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

#[derive(Subcommand)]
pub enum BudgetAction {
    /// Show the effective budget
    Show,

    /// Set the monthly budget
    Set {
        /// Budget amount
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
}
