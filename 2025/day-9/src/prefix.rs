use std::ops::RangeInclusive;

use crate::grid::{BitGrid, Cell, Grid2D};

/// Summed-area table over the forbidden cells.
///
/// `table[r + 1][c + 1]` holds the number of forbidden cells in `[0, r] x [0, c]`,
/// so any rectangle count is four lookups.
#[derive(Debug, Clone)]
pub struct SummedArea {
    table: Grid2D<usize>,
}

impl SummedArea {
    #[tracing::instrument(level = "debug", skip_all, fields(rows = cells.rows(), cols = cells.cols()))]
    pub fn build(cells: &BitGrid) -> Self {
        let (rows, cols) = (cells.rows(), cells.cols());
        let mut table = Grid2D::new(rows + 1, cols + 1);

        for row in 0..rows {
            for col in 0..cols {
                let here = usize::from(cells.get(row, col));
                let above = table.get(Cell::new(row, col + 1)).copied().unwrap_or(0);
                let left = table.get(Cell::new(row + 1, col)).copied().unwrap_or(0);
                let diag = table.get(Cell::new(row, col)).copied().unwrap_or(0);

                if let Some(total) = table.get_mut(Cell::new(row + 1, col + 1)) {
                    *total = here + above + left - diag;
                }
            }
        }

        Self { table }
    }

    /// `(rows, cols)` of the grid the table was built from.
    pub fn dimensions(&self) -> (usize, usize) {
        let (rows, cols) = self.table.dimensions();
        (rows - 1, cols - 1)
    }

    /// Number of flagged cells in the inclusive rectangle, or `None` if the
    /// ranges are empty or reach outside the grid.
    pub fn count(&self, rows: RangeInclusive<usize>, cols: RangeInclusive<usize>) -> Option<usize> {
        let (row_start, row_end) = (*rows.start(), *rows.end());
        let (col_start, col_end) = (*cols.start(), *cols.end());
        if row_start > row_end || col_start > col_end {
            return None;
        }

        let whole = *self.table.get(Cell::new(row_end + 1, col_end + 1))?;
        let above = *self.table.get(Cell::new(row_start, col_end + 1))?;
        let left = *self.table.get(Cell::new(row_end + 1, col_start))?;
        let diag = *self.table.get(Cell::new(row_start, col_start))?;

        // Add before subtracting so the unsigned sum never dips below zero.
        Some(whole + diag - above - left)
    }

    /// A rectangle is clean when it holds no forbidden cell at all.
    pub fn is_clean(&self, rows: RangeInclusive<usize>, cols: RangeInclusive<usize>) -> bool {
        self.count(rows, cols) == Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    fn brute_count(cells: &BitGrid, rows: RangeInclusive<usize>, cols: RangeInclusive<usize>) -> usize {
        rows.flat_map(|row| cols.clone().map(move |col| (row, col)))
            .filter(|&(row, col)| cells.get(row, col))
            .count()
    }

    #[test]
    fn counts_small_grid() {
        // 1 0 1
        // 0 1 1
        let mut cells = BitGrid::new(2, 3);
        cells.set(0, 0, true);
        cells.set(0, 2, true);
        cells.set(1, 1, true);
        cells.set(1, 2, true);

        let index = SummedArea::build(&cells);
        assert_eq!(index.dimensions(), (2, 3));
        assert_eq!(index.count(0..=1, 0..=2), Some(4));
        assert_eq!(index.count(0..=0, 1..=1), Some(0));
        assert_eq!(index.count(1..=1, 1..=2), Some(2));
        assert_eq!(index.count(0..=1, 2..=2), Some(2));
        assert!(index.is_clean(0..=0, 1..=1));
        assert!(!index.is_clean(0..=1, 0..=0));
    }

    #[test]
    fn out_of_range_queries_are_rejected() {
        let index = SummedArea::build(&BitGrid::new(3, 3));
        assert_eq!(index.count(0..=3, 0..=0), None);
        assert_eq!(index.count(0..=0, 2..=5), None);
        #[allow(clippy::reversed_empty_ranges)]
        let backwards = 2..=1;
        assert_eq!(index.count(backwards, 0..=0), None);
        assert!(!index.is_clean(0..=9, 0..=9));
    }

    #[rstest]
    #[case(1, 1, 1, 0.5)]
    #[case(2, 1, 9, 0.3)]
    #[case(3, 12, 5, 0.5)]
    #[case(4, 17, 23, 0.1)]
    #[case(5, 20, 20, 0.9)]
    fn matches_direct_counting(
        #[case] seed: u64,
        #[case] rows: usize,
        #[case] cols: usize,
        #[case] density: f64,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut cells = BitGrid::new(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.set(row, col, rng.gen_bool(density));
            }
        }

        let index = SummedArea::build(&cells);
        for row_start in 0..rows {
            for row_end in row_start..rows {
                for col_start in 0..cols {
                    for col_end in col_start..cols {
                        let expected = brute_count(&cells, row_start..=row_end, col_start..=col_end);
                        assert_eq!(
                            index.count(row_start..=row_end, col_start..=col_end),
                            Some(expected),
                            "rows {row_start}..={row_end}, cols {col_start}..={col_end}"
                        );
                    }
                }
            }
        }
    }
}
