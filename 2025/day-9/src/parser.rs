use chumsky::prelude::*;
use glam::I64Vec2;
use miette::*;

/// A red tile. `x` is the column, `y` is the row.
pub type Point = I64Vec2;

/// One `x,y` pair per line. Negative coordinates are accepted.
pub fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Point>, extra::Err<Rich<'a, char>>> {
    let coord = just('-')
        .or_not()
        .then(text::int(10))
        .to_slice()
        .from_str::<i64>()
        .unwrapped();

    coord
        .then_ignore(just(','))
        .then(coord)
        .map(|(x, y)| Point::new(x, y))
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .padded()
}

#[tracing::instrument(skip(input))]
pub fn parse_points(input: &str) -> Result<Vec<Point>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}
