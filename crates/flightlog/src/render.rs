//! Table and JSON presentation for flight collections.
//!
//! Rendering returns plain strings; the command layer decides where they
//! go. Column widths come from the display configuration, whose defaults
//! match the layout the tool has always printed.

use crate::config::DisplayConfig;
use crate::error::Result;
use crate::flights::FlightList;

/// Message shown instead of a table when there are no records.
pub const EMPTY_MESSAGE: &str = "Список рейсов пуст.";

/// Width of the index column.
const INDEX_WIDTH: usize = 4;

/// Render the collection as a bordered fixed-width table.
///
/// An empty collection renders as [`EMPTY_MESSAGE`] alone, with no borders.
/// Rows are numbered from 1 in insertion order; the destination and number
/// are left-aligned, the aircraft type right-aligned.
#[must_use]
pub fn table(flights: &FlightList, display: &DisplayConfig) -> String {
    if flights.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let rule = format!(
        "+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(INDEX_WIDTH),
        "-".repeat(display.point_width),
        "-".repeat(display.number_width),
        "-".repeat(display.kind_width),
    );

    let mut lines = Vec::with_capacity(flights.len() + 4);
    lines.push(rule.clone());
    lines.push(format!(
        "| {no:^iw$} | {point:^pw$} | {number:^nw$} | {kind:^kw$} |",
        no = "No",
        point = "Пункт назначения",
        number = "No рейса",
        kind = "Тип самолета",
        iw = INDEX_WIDTH,
        pw = display.point_width,
        nw = display.number_width,
        kw = display.kind_width,
    ));
    lines.push(rule.clone());

    for (idx, record) in flights.iter().enumerate() {
        lines.push(format!(
            "| {no:>iw$} | {point:<pw$} | {number:<nw$} | {kind:>kw$} |",
            no = idx + 1,
            point = record.point,
            number = record.number,
            kind = record.kind,
            iw = INDEX_WIDTH,
            pw = display.point_width,
            nw = display.number_width,
            kw = display.kind_width,
        ));
    }

    lines.push(rule);
    lines.join("\n")
}

/// Render the collection as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn json(flights: &FlightList) -> Result<String> {
    Ok(serde_json::to_string_pretty(flights)?)
}
