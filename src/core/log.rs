use crate::db::log::{LogRow, load_log};
use crate::errors::AppResult;
use crate::utils::table::{strip_ansi, visible_width};
use ansi_term::Colour;
use rusqlite::Connection;

const MAX_OP_WIDTH: usize = 60;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "start" => Colour::Green,
        "del" => Colour::Red,
        "edit" | "timer" | "confirm" => Colour::Yellow,
        "stop" | "copy" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        other if other.starts_with("tag_") || other.starts_with("project_") => Colour::Blue,
        other if other.starts_with("setting") => Colour::Purple,
        _ => Colour::White,
    }
}

/// `op (target)`, cut to `MAX_OP_WIDTH` visible chars, with only the
/// operation word colored.
fn format_op_target(row: &LogRow) -> String {
    let color = color_for_operation(&row.operation);
    let plain = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };

    let visible = strip_ansi(&plain);
    let truncated = if visible.chars().count() > MAX_OP_WIDTH {
        let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    match truncated.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}

fn display_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub struct LogLogic;

impl LogLogic {
    pub fn render_log(conn: &Connection) -> AppResult<Vec<String>> {
        let rows = load_log(conn)?;

        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let dates: Vec<String> = rows.iter().map(|r| display_date(&r.date)).collect();
        let date_w = dates.iter().map(String::len).max().unwrap_or(10);
        let ops: Vec<String> = rows.iter().map(format_op_target).collect();
        let op_w = ops
            .iter()
            .map(|o| visible_width(o))
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        let lines = rows
            .iter()
            .zip(dates)
            .zip(ops)
            .map(|((row, date), op)| {
                let padding = " ".repeat(op_w.saturating_sub(visible_width(&op)));
                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    row.id, date, op, padding, row.message
                )
            })
            .collect();
        Ok(lines)
    }

    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let lines = Self::render_log(conn)?;
        println!("📜 Internal log:\n");
        for line in lines {
            println!("{line}");
        }
        Ok(())
    }
}
