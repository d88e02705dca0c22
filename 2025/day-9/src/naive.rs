//! Full resolution solver for small floors.
//!
//! Works on the real tile grid (plus a one tile margin) with the same wall,
//! flood and inclusive sizing rules as [`crate::Floor`], and checks each
//! rectangle tile by tile. Only useful as a reference on inputs whose
//! bounding box is small.

use itertools::Itertools;

use crate::boundary::rasterize;
use crate::compress::{AxisMap, Compression};
use crate::error::TileError;
use crate::flood::flood_exterior;
use crate::parser::Point;
use crate::scanner::Rectangle;

/// Largest grid the reference solver agrees to allocate.
pub const MAX_CELLS: u128 = 1 << 24;

#[tracing::instrument(skip_all, fields(points = points.len()))]
pub fn largest_clean_area(points: &[Point]) -> Result<u128, TileError> {
    if points.len() < 3 {
        return Err(TileError::TooFewTiles(points.len()));
    }

    // Every real coordinate from min - 1 to max + 1 gets its own line.
    let rows = dense_axis(points.iter().map(|p| p.y))?;
    let cols = dense_axis(points.iter().map(|p| p.x))?;
    let cells = rows.len() as u128 * cols.len() as u128;
    if cells > MAX_CELLS {
        return Err(TileError::TooLarge { cells });
    }

    let grid = Compression { rows, cols };
    let walls = rasterize(points, &grid)?;
    let forbidden = flood_exterior(&walls);

    let mut best = 0;
    for (&a, &b) in points.iter().tuple_combinations() {
        let rect = Rectangle::new(a, b);
        if rect.area() <= best {
            continue;
        }
        let (ca, cb) = (grid.cell_of(a)?, grid.cell_of(b)?);
        let clean = (ca.row.min(cb.row)..=ca.row.max(cb.row))
            .cartesian_product(ca.col.min(cb.col)..=ca.col.max(cb.col))
            .all(|(row, col)| !forbidden.get(row, col));
        if clean {
            best = rect.area();
        }
    }
    Ok(best)
}

fn dense_axis(values: impl Iterator<Item = i64>) -> Result<AxisMap, TileError> {
    let (min, max) = match values.minmax().into_option() {
        Some(bounds) => bounds,
        None => return Err(TileError::NoTiles),
    };
    let span = (max as i128 - min as i128 + 3) as u128;
    if span > MAX_CELLS {
        return Err(TileError::TooLarge { cells: span });
    }
    AxisMap::new(min..=max)
}
