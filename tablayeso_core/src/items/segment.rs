//! Measurement segments of walls and ceilings.
//!
//! A wall or ceiling is measured as one or more rectangular segments. Each
//! keeps its raw dimensions for the report and derives two areas: the actual
//! area used for material math (only when both dimensions are positive) and
//! the metraje area used for billing.

use serde::{Deserialize, Serialize};

use crate::metraje::segment_metraje;
use crate::units::SquareMeters;

use super::StructureKind;

/// Raw segment dimensions as entered.
///
/// The second dimension is the height for walls and the length for
/// ceilings; JSON accepts either `"height"` or `"length"` for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentInput {
    pub width: Option<f64>,
    #[serde(alias = "height")]
    pub length: Option<f64>,
}

impl SegmentInput {
    pub fn new(width: f64, length: f64) -> Self {
        SegmentInput {
            width: Some(width),
            length: Some(length),
        }
    }

    /// Starting dimensions for a new segment: 3.0 x 2.4 for walls,
    /// 3.0 x 4.0 for ceilings
    pub fn template(kind: StructureKind) -> Self {
        match kind {
            StructureKind::Ceiling => SegmentInput::new(3.0, 4.0),
            _ => SegmentInput::new(3.0, 2.4),
        }
    }

    /// Both dimensions present and positive
    pub fn is_valid_for_materials(&self) -> bool {
        matches!(self.width, Some(w) if w > 0.0) && matches!(self.length, Some(l) if l > 0.0)
    }
}

/// A segment with its derived quantities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// 1-based position within the item
    pub number: u32,
    /// Raw width (0 when missing)
    pub width: f64,
    /// Raw height (walls) or length (ceilings), 0 when missing
    pub length: f64,
    /// Actual area, 0 unless valid for materials
    pub area: SquareMeters,
    /// Billing area with the one-meter floor per dimension
    pub metraje_area: SquareMeters,
    pub valid_for_materials: bool,
}

impl Segment {
    pub fn from_input(number: u32, input: &SegmentInput) -> Self {
        let valid = input.is_valid_for_materials();
        let width = input.width.filter(|w| !w.is_nan()).unwrap_or(0.0);
        let length = input.length.filter(|l| !l.is_nan()).unwrap_or(0.0);
        Segment {
            number,
            width,
            length,
            area: if valid { SquareMeters(width * length) } else { SquareMeters(0.0) },
            metraje_area: segment_metraje(input.width, input.length),
            valid_for_materials: valid,
        }
    }
}

/// Derive every segment of an item, numbering from 1.
pub fn derive_segments(inputs: &[SegmentInput]) -> Vec<Segment> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| Segment::from_input(i as u32 + 1, input))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_segment() {
        let seg = Segment::from_input(1, &SegmentInput::new(0.5, 2.0));
        assert!(seg.valid_for_materials);
        assert!((seg.area.0 - 1.0).abs() < 1e-12);
        assert!((seg.metraje_area.0 - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_segment_has_no_area() {
        let seg = Segment::from_input(2, &SegmentInput::new(-1.0, 2.0));
        assert!(!seg.valid_for_materials);
        assert_eq!(seg.area.0, 0.0);
        assert_eq!(seg.metraje_area.0, 0.0);
        assert_eq!(seg.width, -1.0);
    }

    #[test]
    fn test_missing_dimension_stored_as_zero() {
        let seg = Segment::from_input(1, &SegmentInput { width: None, length: Some(f64::NAN) });
        assert_eq!(seg.width, 0.0);
        assert_eq!(seg.length, 0.0);
        assert!(!seg.valid_for_materials);
    }

    #[test]
    fn test_numbering() {
        let segs = derive_segments(&[SegmentInput::new(1.0, 1.0), SegmentInput::new(2.0, 2.0)]);
        assert_eq!(segs.iter().map(|s| s.number).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_height_alias() {
        let seg: SegmentInput = serde_json::from_str(r#"{"width": 3.0, "height": 2.4}"#).unwrap();
        assert_eq!(seg.length, Some(2.4));
    }
}
