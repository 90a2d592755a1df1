//! Text and JSON presentation of areas and overlap reports.

use serde::Serialize;
use shapes::{OverlapReport, Shape};

const RULE: &str = "----------------------------";

/// One `Area of the polygon:<name> = <area>` block per shape, in input order.
pub fn areas_text(shapes: &[Shape]) -> String {
    shapes
        .iter()
        .map(|s| format!("Area of the polygon:{} = {}\n{RULE}\n", s.name(), s.area()))
        .collect()
}

#[derive(Debug, Serialize)]
pub struct ShapeRow<'a> {
    pub name: &'a str,
    pub vertices: Vec<[f64; 2]>,
    pub area: f64,
}

#[derive(Debug, Serialize)]
pub struct PairRow<'a> {
    pub first: &'a str,
    pub second: &'a str,
}

/// JSON document; sections a command does not produce are omitted.
#[derive(Debug, Default, Serialize)]
pub struct Document<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shapes: Option<Vec<ShapeRow<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaps: Option<Vec<PairRow<'a>>>,
}

impl<'a> Document<'a> {
    pub fn full(shapes: &'a [Shape], report: &'a OverlapReport) -> Self {
        Self {
            shapes: Some(shape_rows(shapes)),
            overlaps: Some(pair_rows(report)),
        }
    }

    pub fn areas(shapes: &'a [Shape]) -> Self {
        Self {
            shapes: Some(shape_rows(shapes)),
            ..Self::default()
        }
    }

    pub fn overlaps(report: &'a OverlapReport) -> Self {
        Self {
            overlaps: Some(pair_rows(report)),
            ..Self::default()
        }
    }
}

fn shape_rows(shapes: &[Shape]) -> Vec<ShapeRow<'_>> {
    shapes
        .iter()
        .map(|s| ShapeRow {
            name: s.name(),
            vertices: s.points().iter().map(|p| [p.x, p.y]).collect(),
            area: s.area(),
        })
        .collect()
}

fn pair_rows(report: &OverlapReport) -> Vec<PairRow<'_>> {
    report
        .iter()
        .map(|p| PairRow {
            first: &p.first,
            second: &p.second,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shapes::{parse_str, report};

    const SAMPLE: &str = "\
large, [(0, 0), (10, 0), (10, 10), (0, 10)]
tri, [(1, 1), (5, 1), (1, 4)]
far, [(50, 50), (51, 50), (51, 51), (50, 51)]
";

    #[test]
    fn areas_text_matches_classic_layout() {
        let shapes = parse_str(SAMPLE).unwrap();
        assert_eq!(
            areas_text(&shapes),
            "Area of the polygon:large = 100\n\
             ----------------------------\n\
             Area of the polygon:tri = 6\n\
             ----------------------------\n\
             Area of the polygon:far = 1\n\
             ----------------------------\n"
        );
    }

    #[test]
    fn json_document_sections() {
        let shapes = parse_str(SAMPLE).unwrap();
        let r = report(&shapes);
        let full = serde_json::to_value(Document::full(&shapes, &r)).unwrap();
        assert_eq!(full["shapes"][1]["area"], json!(6.0));
        assert_eq!(full["shapes"][1]["vertices"], json!([[1.0, 1.0], [5.0, 1.0], [1.0, 4.0]]));
        assert_eq!(full["overlaps"], json!([{ "first": "tri", "second": "large" }]));

        let areas = serde_json::to_value(Document::areas(&shapes)).unwrap();
        assert!(areas.get("overlaps").is_none());
        let pairs = serde_json::to_value(Document::overlaps(&r)).unwrap();
        assert!(pairs.get("shapes").is_none());
    }

    #[test]
    fn empty_report_renders_no_overlap_message() {
        let text = "a, [(0,0),(1,0),(1,1),(0,1)]\nb, [(10,10),(11,10),(11,11),(10,11)]";
        let shapes = parse_str(text).unwrap();
        let r = report(&shapes);
        assert_eq!(r.to_string(), "No overlapping shapes found.\n");
        let doc = serde_json::to_value(Document::overlaps(&r)).unwrap();
        assert_eq!(doc["overlaps"], json!([]));
    }
}
