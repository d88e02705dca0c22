use miette::Diagnostic;
use thiserror::Error;

use crate::parser::Point;

#[derive(Debug, Error, Diagnostic)]
pub enum TileError {
    #[error("no red tiles to compress")]
    #[diagnostic(code(day_9::no_tiles))]
    NoTiles,

    #[error("a closed loop needs at least 3 red tiles, got {0}")]
    #[diagnostic(
        code(day_9::too_few_tiles),
        help("every line of the input is one corner of the loop")
    )]
    TooFewTiles(usize),

    #[error("edge {index} joins {from} to {to} diagonally")]
    #[diagnostic(
        code(day_9::diagonal_edge),
        help("consecutive red tiles must be joined by a straight horizontal or vertical line")
    )]
    DiagonalEdge { index: usize, from: Point, to: Point },

    #[error("coordinate {0} leaves no room for a padding row or column")]
    #[diagnostic(code(day_9::coordinate_overflow))]
    CoordinateOverflow(i64),

    #[error("point {0} is not part of the compressed grid")]
    #[diagnostic(code(day_9::unmapped_point))]
    UnmappedPoint(Point),

    #[error("a full resolution grid would need {cells} cells")]
    #[diagnostic(
        code(day_9::too_large),
        help("use the compressed engine for inputs with large coordinates")
    )]
    TooLarge { cells: u128 },
}
