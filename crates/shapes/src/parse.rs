//! Line-oriented shape input.
//!
//! Format, one shape per line:
//!
//! ```text
//! square, [(0, 0), (1, 0), (1, 1), (0, 1)]
//! ```
//!
//! The name runs up to the first comma. Brackets and parentheses in the rest
//! are dropped, commas act as whitespace, and the remaining numbers are read
//! as consecutive `(x, y)` pairs; only finite values are accepted. Blank
//! lines are skipped.

use nalgebra::Vector2;
use thiserror::Error;

use crate::geom2::{Point, Shape};

/// Errors carry the 1-based line number of the offending input line.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("line {line}: expected `name, [(x, y), ...]`, found no comma")]
    MissingSeparator { line: usize },
    #[error("line {line}: invalid coordinate `{token}`")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: {count} coordinates do not form (x, y) pairs")]
    OddCoordinateCount { line: usize, count: usize },
}

/// Parse every non-blank line of `text` into a shape, preserving order.
pub fn parse_str(text: &str) -> Result<Vec<Shape>, ParseError> {
    let mut shapes = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let shape = parse_numbered(raw, idx + 1)?;
        tracing::debug!(name = shape.name(), vertices = shape.len(), "parsed shape");
        shapes.push(shape);
    }
    Ok(shapes)
}

/// Parse a single line; errors report it as line 1.
pub fn parse_line(line: &str) -> Result<Shape, ParseError> {
    parse_numbered(line, 1)
}

fn parse_numbered(raw: &str, line: usize) -> Result<Shape, ParseError> {
    let (name, rest) = raw
        .split_once(',')
        .ok_or(ParseError::MissingSeparator { line })?;
    let cleaned: String = rest
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '(' | ')'))
        .map(|c| if c == ',' { ' ' } else { c })
        .collect();
    let coords = cleaned
        .split_whitespace()
        .map(|tok| {
            tok.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseError::InvalidNumber {
                    line,
                    token: tok.to_string(),
                })
        })
        .collect::<Result<Vec<f64>, _>>()?;
    if coords.len() % 2 != 0 {
        return Err(ParseError::OddCoordinateCount {
            line,
            count: coords.len(),
        });
    }
    let points: Vec<Point> = coords
        .chunks_exact(2)
        .map(|xy| Vector2::new(xy[0], xy[1]))
        .collect();
    Ok(Shape::new(name.trim(), points))
}
