pub mod boundary;
pub mod compress;
pub mod error;
pub mod flood;
pub mod floor;
pub mod grid;
pub mod naive;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod prefix;
pub mod scanner;

pub use error::TileError;
pub use floor::Floor;
pub use parser::Point;
