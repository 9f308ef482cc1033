//! Unified application error type.
//! All modules (db, core, cli, ui) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store failures
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Domain errors
    // ---------------------------
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("A work entry titled '{0}' already exists today")]
    DuplicateToday(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Permission denied: {0}")]
    Permission(String),

    #[error("{0}")]
    InUse(String),

    #[error("A live timer is already running")]
    TickActive,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

/// Coarse classification used by the view to pick a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotFound,
    DuplicateToday,
    Validation,
    Permission,
    InUse,
    StoreFailure,
    Internal,
}

impl AppError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        AppError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound { .. } => ErrorCode::NotFound,
            AppError::DuplicateToday(_) => ErrorCode::DuplicateToday,
            AppError::Validation(_) => ErrorCode::Validation,
            AppError::Permission(_) => ErrorCode::Permission,
            AppError::InUse(_) => ErrorCode::InUse,
            AppError::Db(_) | AppError::Migration(_) => ErrorCode::StoreFailure,
            AppError::Io(_)
            | AppError::TickActive
            | AppError::Config(_)
            | AppError::Csv(_)
            | AppError::Export(_)
            | AppError::Other(_) => ErrorCode::Internal,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
