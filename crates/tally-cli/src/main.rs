//! Tally CLI - Expense tracker
//!
//! Usage:
//!   tally init                             Initialize database
//!   tally add --item Tea --price 2.5       Record an expense
//!   tally report                           Show the spending report
//!   tally budget set 500                   Set the monthly budget
//!   tally serve --port 3000                Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Add {
            item,
            price,
            category,
            date,
        } => {
            let service = commands::open_service(&cli.db)?;
            commands::cmd_add(
                &service,
                &item,
                &price,
                category.as_deref(),
                date.as_deref(),
                commands::today(),
            )
        }
        Commands::Report { json } => {
            let service = commands::open_service(&cli.db)?;
            commands::cmd_report(&service, json, commands::today())
        }
        Commands::Budget { action } => {
            let service = commands::open_service(&cli.db)?;
            match action {
                None | Some(BudgetAction::Show) => commands::cmd_budget_show(&service),
                Some(BudgetAction::Set { amount }) => commands::cmd_budget_set(&service, amount),
            }
        }
        Commands::Serve { port, host } => commands::cmd_serve(&cli.db, &host, port).await,
    }
}
