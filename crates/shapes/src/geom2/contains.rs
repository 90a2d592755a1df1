//! Even-odd point-in-polygon test.

use super::types::Point;

/// Ray casting towards +x: toggle on every edge whose y-span straddles `p.y`
/// and whose crossing lies at or right of `p.x`.
///
/// Policy
/// - Horizontal edges (`y_i == y_j`) are skipped before the intersection
///   division, so the test never divides by zero.
/// - Points on the boundary follow the formula (`<=` on x); no guarantee either way.
/// - Fewer than 3 vertices contain nothing.
pub fn point_in_polygon(p: Point, points: &[Point]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = points[i];
        let b = points[j];
        j = i;
        if a.y == b.y {
            continue;
        }
        if (a.y >= p.y) != (b.y >= p.y) {
            let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x <= x_cross {
                inside = !inside;
            }
        }
    }
    inside
}
