//! Map compositing: one marker glyph spliced into the static world map.

use crate::domain::constants::MARKER_GLYPH;
use crate::domain::models::MarkerPosition;
use crossterm::style::Stylize;

/// Splice `glyph` into `line` at `column`, replacing exactly one character.
/// Slice-tolerant: a column at or past the end of the line appends the glyph.
fn splice(line: &str, column: usize, glyph: &str) -> String {
    let before: String = line.chars().take(column).collect();
    let after: String = line.chars().skip(column + 1).collect();
    format!("{before}{glyph}{after}")
}

/// Compose the map with the marker substituted at its cell.
///
/// Rows are indexed descending from `rows.len()` at the top down to 1,
/// increasing upward like latitude. A marker row matching no row index, or a
/// negative column, leaves every row untouched; no error is raised.
pub fn compose_map(rows: &[&str], marker: MarkerPosition, glyph: &str) -> Vec<String> {
    rows.iter()
        .enumerate()
        .map(|(i, line)| {
            let row_index = rows.len() as i32 - i as i32;
            match (row_index == marker.row, usize::try_from(marker.column)) {
                (true, Ok(column)) => splice(line, column, glyph),
                _ => (*line).to_string(),
            }
        })
        .collect()
}

/// The marker glyph as printed: bright yellow unless plain output was asked
/// for.
pub fn marker_glyph(plain: bool) -> String {
    if plain {
        MARKER_GLYPH.to_string()
    } else {
        MARKER_GLYPH.yellow().to_string()
    }
}

pub fn print_map(rows: &[&str], marker: MarkerPosition, plain: bool) {
    let glyph = marker_glyph(plain);
    for line in compose_map(rows, marker, &glyph) {
        println!("{line}");
    }
}
