//! Table rendering utilities for CLI outputs.
//!
//! Cells may carry ANSI escapes; widths are measured on the visible text.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());

pub fn strip_ansi(s: &str) -> String {
    match ANSI.as_ref() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Display width of `s` ignoring escape sequences.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

pub fn pad(s: &str, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(visible_width(s));
    match align {
        Align::Left => format!("{s}{}", " ".repeat(gap)),
        Align::Center => {
            let left = gap / 2;
            format!("{}{s}{}", " ".repeat(left), " ".repeat(gap - left))
        }
    }
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

/// A rendered line: the cells plus an optional band color painted over the
/// whole line (header, date separators, totals, selection).
pub struct Line {
    pub cells: Vec<String>,
    pub band: Option<&'static str>,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Line>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, cells: Vec<String>, band: Option<&'static str>) {
        self.rows.push(Line { cells, band });
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.cells.get(i))
                    .map(|c| visible_width(c))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render the header and every row. `rule` is repeated under the header.
    pub fn render(&self, header_band: &'static str, rule: &str) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(&c.header, *w, c.align))
            .collect();
        push_line(&mut out, &header.join(" │ "), Some(header_band));

        if !rule.is_empty() {
            let total = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
            out.push_str(&rule.repeat(total));
            out.push('\n');
        }

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (c, w))| {
                    let text = row.cells.get(i).map(String::as_str).unwrap_or("");
                    pad(text, *w, c.align)
                })
                .collect();
            push_line(&mut out, &cells.join(" │ "), row.band);
        }

        out
    }
}

fn push_line(out: &mut String, line: &str, band: Option<&str>) {
    match band {
        Some(color) => {
            // Re-apply the band after every reset emitted by a colored cell.
            let banded = line.replace(super::colors::RESET, &format!("{}{color}", super::colors::RESET));
            out.push_str(&format!("{color}{banded}{}", super::colors::RESET));
        }
        None => out.push_str(line),
    }
    out.push('\n');
}
