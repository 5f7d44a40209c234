//! Table rendering for train listings

use comfy_table::{Cell, CellAlignment, Table, presets};

use super::record::Train;

pub const EMPTY_MESSAGE: &str = "No trains registered.";

/// Render trains as a bordered table numbered from 1.
pub fn render_table<'a, I>(trains: I) -> String
where
    I: IntoIterator<Item = &'a Train>,
{
    let mut table = Table::new();
    table.load_preset(presets::ASCII_FULL);
    table.set_header(vec![
        Cell::new("No"),
        Cell::new("Departure point"),
        Cell::new("Train number"),
        Cell::new("Departure time"),
        Cell::new("Destination"),
    ]);

    let mut rows = 0usize;
    for (idx, train) in trains.into_iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&train.departure_point),
            Cell::new(&train.number_train),
            Cell::new(&train.time_departure),
            Cell::new(&train.destination),
        ]);
        rows += 1;
    }

    if rows == 0 {
        return EMPTY_MESSAGE.to_string();
    }

    for (index, alignment) in [
        (0, CellAlignment::Right),
        (3, CellAlignment::Right),
        (4, CellAlignment::Center),
    ] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(alignment);
        }
    }

    table.to_string()
}
