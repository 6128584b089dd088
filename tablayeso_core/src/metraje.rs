//! # Metraje (Billing Quantities)
//!
//! Metraje is the quantity a job is quoted on. It is computed from the raw
//! inputs with a purchasing-floor rule: every dimension below one meter
//! counts as a full meter, and a missing or non-positive dimension zeroes its
//! segment. It is kept apart from the actual area used for
//! material math.
//!
//! The [`preview`] function is what a form calls on every edit; it needs no
//! validation and never fails.
//!
//! ## Example
//!
//! ```rust
//! use tablayeso_core::metraje::segment_metraje;
//!
//! // 0.5 m wide counts as 1 m
//! let m = segment_metraje(Some(0.5), Some(2.0));
//! assert!((m.0 - 2.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::items::ItemInput;
use crate::units::{Meters, SquareMeters};

/// Unit a metraje is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetrajeUnit {
    /// Walls and ceilings
    SquareMeters,
    /// Soffits
    LinearMeters,
}

impl MetrajeUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            MetrajeUnit::SquareMeters => "m²",
            MetrajeUnit::LinearMeters => "m",
        }
    }
}

/// Billing quantity of one item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metraje {
    pub value: f64,
    pub unit: MetrajeUnit,
}

impl std::fmt::Display for Metraje {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit.symbol())
    }
}

/// Live metraje for an item being edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetrajePreview {
    /// Per-segment metraje, in input order (empty for soffits)
    pub segments: Vec<f64>,
    pub total: Metraje,
}

/// Metraje area of one wall/ceiling segment.
pub fn segment_metraje(width: Option<f64>, length: Option<f64>) -> SquareMeters {
    Meters::billing(width) * Meters::billing(length)
}

/// Metraje length of a soffit: floored length times face count, or zero
/// when either is missing or non-positive.
pub fn soffit_metraje(length: Option<f64>, faces: Option<i64>) -> Meters {
    match (length, faces) {
        (Some(l), Some(f)) if l > 0.0 && f > 0 => Meters::billing(Some(l)) * f as f64,
        _ => Meters(0.0),
    }
}

/// Recompute the metraje of a raw item without validating it.
pub fn preview(input: &ItemInput) -> MetrajePreview {
    match input {
        ItemInput::Wall(wall) => area_preview(wall.segments.iter().map(|s| (s.width, s.length))),
        ItemInput::Ceiling(ceiling) => {
            area_preview(ceiling.segments.iter().map(|s| (s.width, s.length)))
        }
        ItemInput::Soffit(soffit) => MetrajePreview {
            segments: Vec::new(),
            total: Metraje {
                value: soffit_metraje(soffit.length, soffit.faces).0,
                unit: MetrajeUnit::LinearMeters,
            },
        },
    }
}

fn area_preview(dims: impl Iterator<Item = (Option<f64>, Option<f64>)>) -> MetrajePreview {
    let segments: Vec<f64> = dims.map(|(w, l)| segment_metraje(w, l).0).collect();
    let total = segments.iter().sum();
    MetrajePreview {
        segments,
        total: Metraje {
            value: total,
            unit: MetrajeUnit::SquareMeters,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{CeilingInput, SegmentInput, SoffitInput, WallInput};

    #[test]
    fn test_floor_rule() {
        assert!((segment_metraje(Some(0.5), Some(2.0)).0 - 2.0).abs() < 1e-12);
        assert!((segment_metraje(Some(0.3), Some(0.4)).0 - 1.0).abs() < 1e-12);
        assert!((segment_metraje(Some(3.0), Some(2.4)).0 - 7.2).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_dimension_zeroes_segment() {
        assert_eq!(segment_metraje(Some(0.0), Some(2.0)).0, 0.0);
        assert_eq!(segment_metraje(Some(2.0), Some(-1.0)).0, 0.0);
        assert_eq!(segment_metraje(None, Some(2.0)).0, 0.0);
    }

    #[test]
    fn test_soffit_metraje() {
        assert!((soffit_metraje(Some(0.6), Some(2)).0 - 2.0).abs() < 1e-12);
        assert!((soffit_metraje(Some(4.5), Some(1)).0 - 4.5).abs() < 1e-12);
        assert_eq!(soffit_metraje(Some(4.5), Some(0)).0, 0.0);
        assert_eq!(soffit_metraje(None, Some(2)).0, 0.0);
    }

    #[test]
    fn test_wall_preview_counts_invalid_segments_as_zero() {
        let input = ItemInput::Wall(WallInput {
            segments: vec![
                SegmentInput::new(0.5, 2.0),
                SegmentInput { width: None, length: Some(2.0) },
                SegmentInput::new(3.0, 2.4),
            ],
            ..WallInput::default()
        });
        let p = preview(&input);
        assert_eq!(p.segments.len(), 3);
        assert!((p.segments[0] - 2.0).abs() < 1e-12);
        assert_eq!(p.segments[1], 0.0);
        assert!((p.total.value - 9.2).abs() < 1e-9);
        assert_eq!(p.total.unit, MetrajeUnit::SquareMeters);
    }

    #[test]
    fn test_ceiling_preview() {
        let input = ItemInput::Ceiling(CeilingInput {
            segments: vec![SegmentInput::new(0.8, 0.9)],
            ..CeilingInput::default()
        });
        assert!((preview(&input).total.value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_soffit_preview() {
        let input = ItemInput::Soffit(SoffitInput {
            length: Some(3.0),
            faces: Some(2),
            ..SoffitInput::default()
        });
        let p = preview(&input);
        assert!(p.segments.is_empty());
        assert_eq!(p.total.unit, MetrajeUnit::LinearMeters);
        assert!((p.total.value - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        let m = Metraje { value: 7.2, unit: MetrajeUnit::SquareMeters };
        assert_eq!(m.to_string(), "7.20 m²");
    }
}
