//! Polygon areas and pairwise overlap detection.
//!
//! Layout
//! - `geom2`: point/shape types, shoelace area, even-odd containment, and a
//!   seeded random polygon sampler.
//! - `overlap`: tri-state pairwise detector and the ordered overlap report.
//! - `parse`: line-oriented reader for `name, [(x, y), ...]` input files.
//!
//! Everything here is a pure function over immutable values; the CLI crate
//! owns I/O and presentation.

pub mod geom2;
pub mod overlap;
pub mod parse;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{area, point_in_polygon, signed_area, Point, Shape};
pub use overlap::{overlaps, report, Overlap, OverlapPair, OverlapReport};
pub use parse::{parse_line, parse_str, ParseError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_shape_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{area, area_centroid, point_in_polygon, signed_area, Point, Shape};
    pub use crate::overlap::{overlaps, report, Overlap, OverlapPair, OverlapReport};
    pub use crate::parse::{parse_line, parse_str, ParseError};
    pub use nalgebra::Vector2 as Vec2;
}
