//! Table formatting using comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::commands::trace::TraceRow;

const TRACE_COLUMNS: [&str; 6] = ["Throw", "Pins", "Multiplier", "Points", "Score", "Bonus"];

/// Creates a styled table with one row per scored throw.
pub fn trace_table(rows: &[TraceRow]) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = TRACE_COLUMNS
        .iter()
        .map(|col| {
            if super::no_color() {
                Cell::new(col)
            } else {
                Cell::new(col)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            }
        })
        .collect();
    table.set_header(header_cells);

    for row in rows {
        let bonus = if row.bonus_armed { "armed" } else { "" };
        let bonus_cell = if row.bonus_armed && !super::no_color() {
            Cell::new(bonus).fg(Color::Yellow)
        } else {
            Cell::new(bonus)
        };

        table.add_row(vec![
            Cell::new(row.throw_number),
            Cell::new(row.pins),
            Cell::new(format!("x{}", row.multiplier)),
            Cell::new(row.points),
            Cell::new(row.score),
            bonus_cell,
        ]);
    }

    table
}

/// Prints the trace table.
pub fn print_trace_table(rows: &[TraceRow]) {
    let table = trace_table(rows);
    println!("{table}");
}
