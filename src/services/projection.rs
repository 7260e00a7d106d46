//! Geographic degrees to map grid cells.
//!
//! Both axes round half away from zero. Inputs are not range-checked;
//! coordinates outside [-180, 180] x [-90, 90] can land off the grid and the
//! renderer drops such markers.

use crate::domain::constants::{MAP_HEIGHT, MAP_WIDTH};
use crate::domain::models::{MarkerPosition, PositionFix};

/// Map a longitude in degrees to a column.
///
/// The prime meridian lands on column 35. A result of MAP_WIDTH or more is
/// folded back by one map width, so +180 and -180 both land on column 0 and
/// in-range inputs stay inside [0, MAP_WIDTH).
pub fn longitude_to_column(longitude: f64) -> i32 {
    let degrees_per_cell = 360.0 / f64::from(MAP_WIDTH);
    let mut column = (longitude / degrees_per_cell).round() as i32 + MAP_WIDTH / 2;
    if column >= MAP_WIDTH {
        column -= MAP_WIDTH;
    }
    column
}

/// Map a latitude in degrees to a row index.
///
/// Rows count upward from 1 at the bottom; the equator lands on row 11 and
/// +90 on row 22. Latitude -90 computes to exactly 0 and is forced onto
/// row 1; nothing else is clamped.
pub fn latitude_to_row(latitude: f64) -> i32 {
    let degrees_per_cell = 90.0 / f64::from(MAP_HEIGHT / 2);
    let mut row = (latitude / degrees_per_cell).round() as i32 + MAP_HEIGHT / 2;
    if row == 0 {
        row = 1;
    }
    row
}

pub fn project(fix: PositionFix) -> MarkerPosition {
    MarkerPosition {
        column: longitude_to_column(fix.longitude),
        row: latitude_to_row(fix.latitude),
    }
}
