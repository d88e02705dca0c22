use itertools::Itertools;

use crate::compress::Compression;
use crate::error::TileError;
use crate::grid::BitGrid;
use crate::parser::Point;

/// Marks every compressed cell covered by an edge of the loop as a wall.
///
/// Edges run between consecutive points, and the last point joins back to the
/// first. Each edge fills the inclusive box between its endpoints, which is a
/// one cell wide strip because edges must be horizontal or vertical.
#[tracing::instrument(level = "debug", skip_all, fields(points = points.len()))]
pub fn rasterize(points: &[Point], compression: &Compression) -> Result<BitGrid, TileError> {
    let (rows, cols) = compression.dimensions();
    let mut walls = BitGrid::new(rows, cols);

    let cells = compression.cells_of(points)?;
    let edges = points.iter().zip(&cells).circular_tuple_windows();

    for (index, ((from, a), (to, b))) in edges.enumerate() {
        if from.x != to.x && from.y != to.y {
            return Err(TileError::DiagonalEdge {
                index,
                from: *from,
                to: *to,
            });
        }

        for row in a.row.min(b.row)..=a.row.max(b.row) {
            for col in a.col.min(b.col)..=a.col.max(b.col) {
                walls.set(row, col, true);
            }
        }
    }

    tracing::debug!(walls = walls.count_ones(), "rasterized boundary");
    Ok(walls)
}
