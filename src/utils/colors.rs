/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Header band (white on purple).
pub const HEADER_BAND: &str = "\x1b[97;45m";
/// Date separator band (white on a lighter purple).
pub const DATE_BAND: &str = "\x1b[97;105m";
/// Daily total band.
pub const TOTAL_BAND: &str = "\x1b[97;44m";

pub const REVERSE: &str = "\x1b[7m";

/// Wrap `value` in `color` … `RESET`.
pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Green when on, red when off: used for the confirmed id and the
/// tracking column.
pub fn color_for_flag(on: bool) -> &'static str {
    if on { GREEN } else { RED }
}

/// Returns GREY when the field is empty, RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() => RESET,
        _ => GREY,
    }
}
