//! Basic value types: `Point` and `Shape`.

use nalgebra::Vector2;

use super::{area::area, contains::point_in_polygon};

/// A vertex in the plane.
pub type Point = Vector2<f64>;

/// Named polygon given as a closed loop of vertices.
///
/// Invariants:
/// - Vertices are kept in input order; winding is not normalized.
/// - Names are not required to be unique.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    name: String,
    points: Vec<Point>,
}

impl Shape {
    #[inline]
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Build from `(x, y)` tuples.
    pub fn from_xy(name: impl Into<String>, xy: &[(f64, f64)]) -> Self {
        let points = xy.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
        Self::new(name, points)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Unsigned shoelace area.
    #[inline]
    pub fn area(&self) -> f64 {
        area(&self.points)
    }

    /// Even-odd containment of `p` in this shape.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        point_in_polygon(p, &self.points)
    }
}
