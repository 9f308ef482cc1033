use crate::errors::{AppError, ErrorCode};
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Short user-facing text for an error, picked by its code.
pub fn friendly(err: &AppError) -> String {
    match err.code() {
        ErrorCode::NotFound => format!("The requested data was not found ({err})."),
        ErrorCode::DuplicateToday => "This work has already been created today.".to_string(),
        ErrorCode::Validation => format!("The input is not valid. {err}"),
        ErrorCode::Permission => "You do not have permission to do this.".to_string(),
        ErrorCode::InUse => format!("Cannot delete: {err}."),
        ErrorCode::StoreFailure => format!("The database reported an error: {err}"),
        ErrorCode::Internal => format!("An error occurred: {err}"),
    }
}
