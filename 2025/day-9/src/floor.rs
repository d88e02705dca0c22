use crate::boundary::rasterize;
use crate::compress::Compression;
use crate::error::TileError;
use crate::flood::flood_exterior;
use crate::grid::{BitGrid, Cell};
use crate::parser::Point;
use crate::prefix::SummedArea;
use crate::scanner::{self, Rectangle};

/// The theater floor: a loop of red tiles, compressed and indexed so any
/// rectangle between two of its tiles can be checked in constant time.
#[derive(Debug, Clone)]
pub struct Floor {
    points: Vec<Point>,
    cells: Vec<Cell>,
    compression: Compression,
    walls: BitGrid,
    forbidden: BitGrid,
    index: SummedArea,
}

impl Floor {
    #[tracing::instrument(skip_all, fields(points = points.len()))]
    pub fn build(points: Vec<Point>) -> Result<Self, TileError> {
        if points.len() < 3 {
            return Err(TileError::TooFewTiles(points.len()));
        }

        let compression = Compression::new(&points)?;
        let cells = compression.cells_of(&points)?;
        let walls = rasterize(&points, &compression)?;
        let forbidden = flood_exterior(&walls);
        let index = SummedArea::build(&forbidden);

        Ok(Self {
            points,
            cells,
            compression,
            walls,
            forbidden,
            index,
        })
    }

    /// `(rows, cols)` of the compressed grid.
    pub fn dimensions(&self) -> (usize, usize) {
        self.compression.dimensions()
    }

    pub fn walls(&self) -> &BitGrid {
        &self.walls
    }

    pub fn forbidden(&self) -> &BitGrid {
        &self.forbidden
    }

    /// Whether the rectangle with corners `a` and `b` stays on red or green
    /// tiles. Both corners must use coordinates known to the compression.
    pub fn is_clean(&self, a: Point, b: Point) -> Result<bool, TileError> {
        let a = self.compression.cell_of(a)?;
        let b = self.compression.cell_of(b)?;
        Ok(self.index.is_clean(
            a.row.min(b.row)..=a.row.max(b.row),
            a.col.min(b.col)..=a.col.max(b.col),
        ))
    }

    pub fn largest_rectangle(&self) -> Option<Rectangle> {
        scanner::largest_clean(&self.points, &self.cells, &self.index)
    }

    /// Area of the largest clean rectangle, 0 when there is none.
    pub fn largest_area(&self) -> u128 {
        self.largest_rectangle().map_or(0, |rect| rect.area())
    }
}
