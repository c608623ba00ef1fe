//! Error types for Tally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Rejected write-path input (empty item, non-positive price, bad date)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A stored record could not be folded into the report
    #[error("Computation error: {0}")]
    Computation(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl Error {
    /// Whether the error was caused by the caller's input rather than the system
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
