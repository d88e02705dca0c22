use miette::*;

use crate::parser::parse_points;
use crate::scanner::largest_any;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = parse_points(input)?;

    // Any two red tiles work as opposite corners here; the loop is ignored.
    let max_area = largest_any(&points).map_or(0, |rect| rect.area());

    Ok(max_area.to_string())
}
