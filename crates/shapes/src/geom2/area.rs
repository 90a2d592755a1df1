//! Shoelace area and area centroid.

use nalgebra::Vector2;

use super::types::Point;

/// Signed shoelace area: positive for counter-clockwise loops, negative for clockwise.
///
/// Fewer than 3 vertices give 0.
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    0.5 * sum
}

/// Unsigned area; winding is discarded.
#[inline]
pub fn area(points: &[Point]) -> f64 {
    signed_area(points).abs()
}

/// Area centroid of a simple polygon (either winding).
///
/// Returns `None` for fewer than 3 vertices or (numerically) zero area.
pub fn area_centroid(points: &[Point]) -> Option<Point> {
    if points.len() < 3 {
        return None;
    }
    let mut a = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        let cross = p.x * q.y - q.x * p.y;
        a += cross;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    a *= 0.5;
    if a.abs() < 1e-18 {
        return None;
    }
    Some(Vector2::new(cx / (6.0 * a), cy / (6.0 * a)))
}
