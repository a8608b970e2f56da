//! Shared table styling for command output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use schooldir_model::DraftStatus;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

pub fn status_cell(status: DraftStatus) -> Cell {
    match status {
        DraftStatus::Pending => Cell::new("PENDING").fg(Color::Yellow),
        DraftStatus::Approved => Cell::new("APPROVED").fg(Color::Green),
        DraftStatus::Published => Cell::new("PUBLISHED")
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
    }
}
