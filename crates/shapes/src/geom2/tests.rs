use super::*;
use nalgebra::{vector, Vector2};

fn unit_square() -> Vec<Point> {
    vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ]
}

#[test]
fn unit_square_area_both_windings() {
    let ccw = unit_square();
    let mut cw = ccw.clone();
    cw.reverse();
    assert!((area(&ccw) - 1.0).abs() < 1e-12);
    assert!((area(&cw) - 1.0).abs() < 1e-12);
    // Sign carries the winding.
    assert!((signed_area(&ccw) - 1.0).abs() < 1e-12);
    assert!((signed_area(&cw) + 1.0).abs() < 1e-12);
}

#[test]
fn triangle_area() {
    let tri = Shape::from_xy("t", &[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
    assert!((tri.area() - 6.0).abs() < 1e-12);
}

#[test]
fn degenerate_loops_have_zero_area() {
    assert_eq!(area(&[]), 0.0);
    assert_eq!(area(&[vector![1.0, 2.0]]), 0.0);
    assert_eq!(area(&[vector![1.0, 2.0], vector![5.0, -1.0]]), 0.0);
    // Collinear triangle.
    let line = [vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
    assert!(area(&line).abs() < 1e-12);
    assert!(area_centroid(&line).is_none());
}

#[test]
fn concave_area() {
    // L-shape: 2x2 square minus the top-right unit square.
    let l = Shape::from_xy(
        "L",
        &[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (1.0, 2.0), (0.0, 2.0)],
    );
    assert!((l.area() - 3.0).abs() < 1e-12);
}

#[test]
fn centroid_of_square_is_contained() {
    let sq = unit_square();
    let c = area_centroid(&sq).unwrap();
    assert!((c - vector![0.5, 0.5]).norm() < 1e-12);
    assert!(point_in_polygon(c, &sq));
    // Winding does not move the centroid.
    let mut cw = sq.clone();
    cw.reverse();
    assert!((area_centroid(&cw).unwrap() - c).norm() < 1e-12);
}

#[test]
fn far_points_are_outside() {
    let sq = unit_square();
    for p in [
        vector![100.0, 0.5],
        vector![-100.0, 0.5],
        vector![0.5, 100.0],
        vector![0.5, -100.0],
        vector![1e9, 1e9],
    ] {
        assert!(!point_in_polygon(p, &sq), "{p:?} reported inside");
    }
}

#[test]
fn concave_notch_is_outside() {
    let l = Shape::from_xy(
        "L",
        &[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (1.0, 2.0), (0.0, 2.0)],
    );
    assert!(l.contains(vector![0.5, 1.5]));
    assert!(l.contains(vector![1.5, 0.5]));
    assert!(!l.contains(vector![1.5, 1.5]));
}

#[test]
fn horizontal_edges_at_query_height() {
    // Square edges at y=0 and y=1 are horizontal; querying on those heights
    // must not divide by zero or produce NaN-driven toggles.
    let sq = unit_square();
    assert!(!point_in_polygon(vector![-1.0, 1.0], &sq));
    assert!(!point_in_polygon(vector![2.0, 0.0], &sq));
    // Inside point at mid-height with many horizontal edges (staircase).
    let stairs = Shape::from_xy(
        "stairs",
        &[
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 1.0),
            (2.0, 1.0),
            (2.0, 2.0),
            (1.0, 2.0),
            (1.0, 3.0),
            (0.0, 3.0),
        ],
    );
    assert!(stairs.contains(vector![0.5, 2.5]));
    assert!(stairs.contains(vector![2.5, 0.5]));
    assert!(!stairs.contains(vector![2.5, 2.5]));
}

#[test]
fn degenerate_loops_contain_nothing() {
    let p = Vector2::new(0.0, 0.0);
    assert!(!point_in_polygon(p, &[]));
    assert!(!point_in_polygon(p, &[vector![0.0, 0.0]]));
    assert!(!point_in_polygon(p, &[vector![-1.0, -1.0], vector![1.0, 1.0]]));
}

#[test]
fn shape_accessors() {
    let s = Shape::from_xy("tri", &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    assert_eq!(s.name(), "tri");
    assert_eq!(s.len(), 3);
    assert!(!s.is_empty());
    assert_eq!(s.points()[1], vector![1.0, 0.0]);
    assert!(Shape::new("empty", Vec::new()).is_empty());
}
