use itertools::Itertools;

use crate::grid::Cell;
use crate::parser::Point;
use crate::prefix::SummedArea;

/// The rectangle with two red tiles on opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub a: Point,
    pub b: Point,
}

impl Rectangle {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Tiles covered, counting both corner rows and columns.
    ///
    /// Widened so any pair of `i64` corners fits: each side is below `2^64`.
    pub fn area(&self) -> u128 {
        let w = (i128::from(self.a.x) - i128::from(self.b.x)).unsigned_abs() + 1;
        let h = (i128::from(self.a.y) - i128::from(self.b.y)).unsigned_abs() + 1;
        w * h
    }
}

/// Keeps the first rectangle seen among those with the largest area.
fn first_largest(rects: impl Iterator<Item = Rectangle>) -> Option<Rectangle> {
    rects.fold(None, |best, rect| match best {
        Some(kept) if kept.area() >= rect.area() => Some(kept),
        _ => Some(rect),
    })
}

/// Checks every pair of corners and keeps the largest rectangle whose
/// compressed footprint contains no forbidden cell. Ties go to the pair that
/// comes first in input order.
///
/// `points` and `cells` must be the same tiles in original and compressed
/// space, in the same order.
#[tracing::instrument(level = "debug", skip_all, fields(points = points.len()))]
pub fn largest_clean(points: &[Point], cells: &[Cell], index: &SummedArea) -> Option<Rectangle> {
    let clean = points
        .iter()
        .zip(cells)
        .tuple_combinations()
        .filter(|((_, c1), (_, c2))| {
            index.is_clean(
                c1.row.min(c2.row)..=c1.row.max(c2.row),
                c1.col.min(c2.col)..=c1.col.max(c2.col),
            )
        })
        .map(|((&a, _), (&b, _))| Rectangle::new(a, b));
    let best = first_largest(clean);

    if let Some(rect) = &best {
        tracing::debug!(a = %rect.a, b = %rect.b, area = %rect.area(), "largest clean rectangle");
    }
    best
}

/// Largest rectangle over every pair of corners, ignoring the loop.
pub fn largest_any(points: &[Point]) -> Option<Rectangle> {
    first_largest(
        points
            .iter()
            .tuple_combinations()
            .map(|(&a, &b)| Rectangle::new(a, b)),
    )
}
