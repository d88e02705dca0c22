use miette::*;

use crate::floor::Floor;
use crate::parser::parse_points;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = parse_points(input)?;
    let floor = Floor::build(points)?;

    let (rows, cols) = floor.dimensions();
    tracing::debug!(rows, cols, "floor ready");

    Ok(floor.largest_area().to_string())
}
