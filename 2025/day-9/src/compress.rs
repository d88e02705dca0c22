use crate::error::TileError;
use crate::grid::Cell;
use crate::parser::Point;

/// The coordinates that matter along one axis, sorted and deduplicated.
///
/// Every input value `v` contributes `v - 1`, `v` and `v + 1`, so two walls one
/// unit apart never collapse into the same compressed line, and the first and
/// last lines always lie outside the polygon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisMap {
    coords: Vec<i64>,
}

impl AxisMap {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Result<Self, TileError> {
        let mut coords = Vec::new();
        for value in values {
            let below = value
                .checked_sub(1)
                .ok_or(TileError::CoordinateOverflow(value))?;
            let above = value
                .checked_add(1)
                .ok_or(TileError::CoordinateOverflow(value))?;
            coords.extend([below, value, above]);
        }
        if coords.is_empty() {
            return Err(TileError::NoTiles);
        }

        coords.sort_unstable();
        coords.dedup();

        Ok(Self { coords })
    }

    /// Position of an original coordinate in the compressed axis.
    #[inline]
    pub fn index_of(&self, value: i64) -> Option<usize> {
        self.coords.binary_search(&value).ok()
    }

    #[inline]
    pub fn value_at(&self, index: usize) -> Option<i64> {
        self.coords.get(index).copied()
    }

    pub fn coords(&self) -> &[i64] {
        &self.coords
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

/// Row and column axes of the compressed grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compression {
    pub rows: AxisMap,
    pub cols: AxisMap,
}

impl Compression {
    #[tracing::instrument(level = "debug", skip_all, fields(points = points.len()))]
    pub fn new(points: &[Point]) -> Result<Self, TileError> {
        let rows = AxisMap::new(points.iter().map(|p| p.y))?;
        let cols = AxisMap::new(points.iter().map(|p| p.x))?;
        tracing::debug!(rows = rows.len(), cols = cols.len(), "compressed axes");
        Ok(Self { rows, cols })
    }

    /// `(rows, cols)` of the compressed grid.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows.len(), self.cols.len())
    }

    pub fn cell_of(&self, point: Point) -> Result<Cell, TileError> {
        match (self.rows.index_of(point.y), self.cols.index_of(point.x)) {
            (Some(row), Some(col)) => Ok(Cell::new(row, col)),
            _ => Err(TileError::UnmappedPoint(point)),
        }
    }

    pub fn cells_of(&self, points: &[Point]) -> Result<Vec<Cell>, TileError> {
        points.iter().map(|&p| self.cell_of(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use miette::Result;
    use rstest::rstest;

    #[test]
    fn pads_every_coordinate() -> Result<()> {
        let axis = AxisMap::new([10, 3, 1_000_000])?;
        assert_eq!(
            axis.coords(),
            &[2, 3, 4, 9, 10, 11, 999_999, 1_000_000, 1_000_001]
        );
        Ok(())
    }

    #[test]
    fn neighbouring_values_share_padding() -> Result<()> {
        let axis = AxisMap::new([4, 5, 5])?;
        assert_eq!(axis.coords(), &[3, 4, 5, 6]);
        Ok(())
    }

    #[rstest]
    #[case(vec![7, 1, 11, 9, 2])]
    #[case(vec![-5, 0, 5])]
    #[case(vec![0])]
    #[case(vec![3_000_000_000, -3_000_000_000, 17])]
    fn order_and_round_trip(#[case] values: Vec<i64>) -> Result<()> {
        let axis = AxisMap::new(values.iter().copied())?;
        assert!(axis.coords().windows(2).all(|w| w[0] < w[1]));
        for (index, &value) in axis.coords().iter().enumerate() {
            assert_eq!(axis.index_of(value), Some(index));
            assert_eq!(axis.value_at(index), Some(value));
        }
        for &value in &values {
            for probe in [value - 1, value, value + 1] {
                assert!(axis.index_of(probe).is_some(), "{probe} missing");
            }
        }
        Ok(())
    }

    #[test]
    fn empty_axis_is_rejected() {
        assert!(matches!(
            AxisMap::new(std::iter::empty()),
            Err(TileError::NoTiles)
        ));
    }

    #[test]
    fn extreme_coordinates_are_rejected() {
        assert!(matches!(
            AxisMap::new([0, i64::MAX]),
            Err(TileError::CoordinateOverflow(i64::MAX))
        ));
        assert!(matches!(
            AxisMap::new([i64::MIN]),
            Err(TileError::CoordinateOverflow(i64::MIN))
        ));
    }

    #[test]
    fn maps_points_to_cells() -> Result<()> {
        let points = [Point::new(0, 0), Point::new(5, 0), Point::new(5, 4)];
        let compression = Compression::new(&points)?;
        assert_eq!(compression.dimensions(), (6, 6));
        assert_eq!(compression.cell_of(Point::new(5, 4))?, Cell::new(4, 4));
        assert_eq!(compression.cell_of(Point::new(-1, 1))?, Cell::new(2, 0));
        assert!(matches!(
            compression.cell_of(Point::new(3, 0)),
            Err(TileError::UnmappedPoint(_))
        ));
        Ok(())
    }
}
