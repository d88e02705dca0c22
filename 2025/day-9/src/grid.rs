use bitvec::prelude::*;

/// Row-major storage of one value per cell.
#[derive(Debug, Clone)]
pub struct Grid2D<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid2D<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }
}

impl<T> Grid2D<T> {
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn offset(&self, at: Cell) -> Option<usize> {
        (at.row < self.rows && at.col < self.cols).then(|| at.row * self.cols + at.col)
    }

    #[inline(always)]
    pub fn get(&self, at: Cell) -> Option<&T> {
        self.offset(at).map(|idx| &self.data[idx])
    }

    #[inline(always)]
    pub fn get_mut(&mut self, at: Cell) -> Option<&mut T> {
        self.offset(at).map(|idx| &mut self.data[idx])
    }
}

/// A position in the compressed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A row-major grid of flags, one bit per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    rows: usize,
    cols: usize,
    bits: BitVec<u64, Lsb0>,
}

impl BitGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            bits: bitvec![u64, Lsb0; 0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Out of bounds cells read as unset.
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.contains(row, col) && self.bits[row * self.cols + col]
    }

    /// Returns the previous value. Out of bounds writes are ignored.
    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        self.bits.replace(row * self.cols + col, value)
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Cells whose bit is set, in row-major order.
    pub fn iter_ones(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        self.bits
            .iter_ones()
            .map(move |idx| Cell::new(idx / cols, idx % cols))
    }

    /// Cells on the outer ring, each exactly once.
    pub fn border(&self) -> impl Iterator<Item = Cell> {
        let (rows, cols) = (self.rows, self.cols);
        let horizontal = (0..cols).flat_map(move |col| {
            let bottom = (rows > 1).then(|| Cell::new(rows - 1, col));
            std::iter::once(Cell::new(0, col)).chain(bottom)
        });
        let vertical = (1..rows.saturating_sub(1)).flat_map(move |row| {
            let right = (cols > 1).then(|| Cell::new(row, cols - 1));
            std::iter::once(Cell::new(row, 0)).chain(right)
        });
        horizontal
            .chain(vertical)
            .filter(move |_| rows > 0 && cols > 0)
    }
}
