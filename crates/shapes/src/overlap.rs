//! Pairwise overlap detection and the ordered overlap report.
//!
//! Overlap criterion
//! - Two shapes overlap when some vertex of one lies inside the other
//!   (`point_in_polygon`). Edge crossings with no contained vertex (e.g. two
//!   triangles forming a hexagram) are not detected.
//!
//! Ordering
//! - `report` scans pairs `(i, j)`, `i < j`, with `i` ascending in the outer
//!   loop and `j` ascending in the inner loop; pairs are emitted in that order.

use std::fmt;

use crate::geom2::{point_in_polygon, Shape};

/// Result of testing one ordered pair `(a, b)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlap {
    None,
    /// A vertex of `a` lies inside `b`.
    AInB,
    /// No vertex of `a` lies inside `b`, but a vertex of `b` lies inside `a`.
    BInA,
}

impl Overlap {
    #[inline]
    pub fn is_overlap(self) -> bool {
        !matches!(self, Overlap::None)
    }
}

/// Test `a` against `b`: vertices of `a` first, then vertices of `b`; the first hit wins.
pub fn overlaps(a: &Shape, b: &Shape) -> Overlap {
    if a.points().iter().any(|&p| point_in_polygon(p, b.points())) {
        Overlap::AInB
    } else if b.points().iter().any(|&p| point_in_polygon(p, a.points())) {
        Overlap::BInA
    } else {
        Overlap::None
    }
}

/// Ordered name pair; `first` is the shape whose vertex was found inside `second`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OverlapPair {
    pub first: String,
    pub second: String,
}

impl OverlapPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl fmt::Display for OverlapPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} overlaps with {}", self.first, self.second)
    }
}

/// Immutable, ordered list of detected overlaps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlapReport {
    pairs: Vec<OverlapPair>,
}

impl OverlapReport {
    #[inline]
    pub fn pairs(&self) -> &[OverlapPair] {
        &self.pairs
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, OverlapPair> {
        self.pairs.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<'a> IntoIterator for &'a OverlapReport {
    type Item = &'a OverlapPair;
    type IntoIter = std::slice::Iter<'a, OverlapPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl fmt::Display for OverlapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pairs.is_empty() {
            return writeln!(f, "No overlapping shapes found.");
        }
        writeln!(f, "Overlapping shape pairs:")?;
        for pair in &self.pairs {
            writeln!(f, "{pair}")?;
        }
        Ok(())
    }
}

/// Run `overlaps` over every pair `i < j` and collect the hits in scan order.
pub fn report(shapes: &[Shape]) -> OverlapReport {
    let mut pairs = Vec::new();
    for (i, a) in shapes.iter().enumerate() {
        for b in &shapes[i + 1..] {
            let pair = match overlaps(a, b) {
                Overlap::AInB => OverlapPair::new(a.name(), b.name()),
                Overlap::BInA => OverlapPair::new(b.name(), a.name()),
                Overlap::None => continue,
            };
            tracing::debug!(first = %pair.first, second = %pair.second, "overlap");
            pairs.push(pair);
        }
    }
    OverlapReport { pairs }
}
