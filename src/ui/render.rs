//! Projection → colored terminal table.

use crate::core::projection::{Projection, ProjectionRow, WORK_HEADER};
use crate::utils::colors::{DATE_BAND, HEADER_BAND, REVERSE, TOTAL_BAND, color_for_flag, paint};
use crate::utils::table::{Align, Column, Table};

fn columns() -> Vec<Column> {
    WORK_HEADER
        .iter()
        .map(|h| Column {
            header: (*h).to_string(),
            align: match *h {
                "TotalTime" | "TRACKING" => Align::Center,
                _ => Align::Left,
            },
        })
        .collect()
}

/// Render every row after the header. `highlight` is a projection row index.
pub fn render_table(projection: &Projection, highlight: Option<usize>, rule: &str) -> String {
    let mut table = Table::new(columns());
    let blank = || vec![String::new(); WORK_HEADER.len()];

    for (index, row) in projection.rows.iter().enumerate() {
        match row {
            ProjectionRow::Header => {}
            ProjectionRow::Separator => table.add_row(blank(), None),
            ProjectionRow::DateHeader { label, action, .. } => {
                let mut cells = blank();
                cells[0] = label.clone();
                cells[5] = (*action).to_string();
                table.add_row(cells, Some(DATE_BAND));
            }
            ProjectionRow::Entry(e) => {
                let cells = vec![
                    paint(&e.id.to_string(), color_for_flag(e.confirmed)),
                    e.total_time.clone(),
                    e.title.clone(),
                    e.project.clone(),
                    e.tag.clone(),
                    paint(e.tracking_label, color_for_flag(e.tracking_active)),
                ];
                let band = (highlight == Some(index)).then_some(REVERSE);
                table.add_row(cells, band);
            }
            ProjectionRow::Total {
                total_time, count, ..
            } => {
                let mut cells = blank();
                cells[0] = "Total".to_string();
                cells[1] = total_time.clone();
                cells[2] = format!("count:{count}");
                table.add_row(cells, Some(TOTAL_BAND));
            }
        }
    }

    table.render(HEADER_BAND, rule)
}
