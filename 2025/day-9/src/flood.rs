use std::collections::VecDeque;

use crate::grid::{BitGrid, Cell};

/// Flags every cell that is not safely inside the loop.
///
/// The whole outer ring is seeded, walls included, and the fill spreads
/// through 4-connected non-wall cells. Walls only stop the spread; a wall
/// that is not on the ring stays unflagged.
#[tracing::instrument(level = "debug", skip_all, fields(rows = walls.rows(), cols = walls.cols()))]
pub fn flood_exterior(walls: &BitGrid) -> BitGrid {
    let (rows, cols) = (walls.rows(), walls.cols());
    let mut forbidden = BitGrid::new(rows, cols);
    let mut queue: VecDeque<Cell> = VecDeque::with_capacity(2 * (rows + cols));

    for cell in walls.border() {
        forbidden.set(cell.row, cell.col, true);
        queue.push_back(cell);
    }

    while let Some(Cell { row, col }) = queue.pop_front() {
        let neighbours = [
            row.checked_sub(1).map(|r| Cell::new(r, col)),
            Some(Cell::new(row + 1, col)),
            col.checked_sub(1).map(|c| Cell::new(row, c)),
            Some(Cell::new(row, col + 1)),
        ];

        for next in neighbours.into_iter().flatten() {
            if !forbidden.contains(next.row, next.col)
                || forbidden.get(next.row, next.col)
                || walls.get(next.row, next.col)
            {
                continue;
            }
            forbidden.set(next.row, next.col, true);
            queue.push_back(next);
        }
    }

    tracing::debug!(forbidden = forbidden.count_ones(), "flooded exterior");
    forbidden
}
