//! Ceiling input and validation.
//!
//! A suspended ceiling hangs a furring grid from support channels. Unlike
//! walls, a bad segment does not reject the whole ceiling: it is reported as
//! a warning and left out of the material math.

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;
use crate::materials::PanelType;
use crate::units::{Meters, SquareMeters};

use super::segment::{derive_segments, Segment, SegmentInput};
use super::{non_negative, parse_label, StructureKind};

/// Raw ceiling fields as entered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CeilingInput {
    pub panel_type: Option<String>,
    /// Plenum depth in meters (slab to ceiling)
    pub plenum: Option<f64>,
    /// Perimeter length in meters that needs no edge trim
    pub trim_deduction: Option<f64>,
    /// Waste applied to this ceiling's panels, in percent
    pub panel_waste_percent: Option<f64>,
    #[serde(default)]
    pub segments: Vec<SegmentInput>,
}

/// A ceiling that passed validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CeilingItem {
    pub panel_type: PanelType,
    pub plenum: Meters,
    pub trim_deduction: Meters,
    pub panel_waste_percent: f64,
    pub segments: Vec<Segment>,
    pub valid_area: SquareMeters,
    /// Sum of 2(w + l) over valid segments
    pub perimeter: Meters,
    pub width_sum: Meters,
    pub length_sum: Meters,
    pub metraje_area: SquareMeters,
    /// Segments left out of the material math
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl CeilingInput {
    pub fn validate(&self) -> Result<CeilingItem, Vec<CalcError>> {
        let mut errors = Vec::new();

        let segments = derive_segments(&self.segments);
        if segments.is_empty() {
            errors.push(CalcError::NoSegments {
                kind: StructureKind::Ceiling.to_string(),
            });
        } else if !segments.iter().any(|s| s.valid_for_materials) {
            errors.push(CalcError::NoValidSegments {
                kind: StructureKind::Ceiling.to_string(),
            });
        }

        let panel_type = parse_label(&self.panel_type, "panel type", PanelType::from_str_flexible)
            .map_err(|e| errors.push(e))
            .ok();
        let plenum = non_negative(self.plenum, "plenum").map_err(|e| errors.push(e)).ok();
        let trim_deduction = non_negative(self.trim_deduction, "trim deduction")
            .map_err(|e| errors.push(e))
            .ok();
        let waste = non_negative(self.panel_waste_percent, "panel waste percent")
            .map_err(|e| errors.push(e))
            .ok();

        match (panel_type, plenum, trim_deduction, waste) {
            (Some(panel_type), Some(plenum), Some(trim_deduction), Some(waste))
                if errors.is_empty() =>
            {
                Ok(build(panel_type, plenum, trim_deduction, waste, segments))
            }
            _ => Err(errors),
        }
    }
}

fn build(
    panel_type: PanelType,
    plenum: f64,
    trim_deduction: f64,
    panel_waste_percent: f64,
    segments: Vec<Segment>,
) -> CeilingItem {
    let mut valid_area = SquareMeters(0.0);
    let mut perimeter = 0.0;
    let mut width_sum = 0.0;
    let mut length_sum = 0.0;
    let mut warnings = Vec::new();

    for seg in &segments {
        if seg.valid_for_materials {
            valid_area += seg.area;
            perimeter += 2.0 * (seg.width + seg.length);
            width_sum += seg.width;
            length_sum += seg.length;
        } else {
            warnings.push(format!(
                "Segment {}: width and length must be > 0 (ignored for materials)",
                seg.number
            ));
        }
    }

    let metraje_area = segments
        .iter()
        .fold(SquareMeters(0.0), |acc, s| acc + s.metraje_area);

    CeilingItem {
        panel_type,
        plenum: Meters(plenum),
        trim_deduction: Meters(trim_deduction),
        panel_waste_percent,
        segments,
        valid_area,
        perimeter: Meters(perimeter),
        width_sum: Meters(width_sum),
        length_sum: Meters(length_sum),
        metraje_area,
        warnings,
    }
}
