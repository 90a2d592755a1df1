//! 2D polygon geometry over plain vertex loops.
//!
//! Purpose
//! - `Shape`: a named, closed vertex loop (last vertex joins the first).
//! - `area`/`signed_area`: shoelace formula; `area_centroid` for tests and sampling.
//! - `point_in_polygon`: even-odd ray casting, horizontal edges skipped.
//!
//! Degenerate loops (fewer than 3 vertices) are accepted everywhere and give
//! zero area and empty containment instead of errors.

mod area;
mod contains;
pub mod rand;
mod types;

pub use area::{area, area_centroid, signed_area};
pub use contains::point_in_polygon;
pub use types::{Point, Shape};

#[cfg(test)]
mod tests;
