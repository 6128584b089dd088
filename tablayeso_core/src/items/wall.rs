//! Wall input and validation.
//!
//! A wall is a stud-and-track partition measured as one or more segments
//! (width x height). It is panelled on one or two faces, each face with its
//! own panel type, and may be built as a double structure.

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;
use crate::materials::{PanelType, StudType};
use crate::units::{Meters, SquareMeters};

use super::segment::{derive_segments, Segment, SegmentInput};
use super::{parse_label, positive, StructureKind};

/// Raw wall fields as entered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WallInput {
    /// Panelled faces, 1 or 2
    pub faces: Option<i64>,
    pub face1_panel: Option<String>,
    /// Only read when `faces` is 2
    pub face2_panel: Option<String>,
    /// Stud spacing in meters (typically 0.40 or 0.61)
    pub stud_spacing: Option<f64>,
    pub stud_type: Option<String>,
    #[serde(default)]
    pub double_structure: bool,
    #[serde(default)]
    pub segments: Vec<SegmentInput>,
}

/// A wall that passed validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallItem {
    pub faces: u8,
    pub face1_panel: PanelType,
    pub face2_panel: Option<PanelType>,
    pub stud_spacing: Meters,
    pub stud_type: StudType,
    pub double_structure: bool,
    pub segments: Vec<Segment>,
    /// Sum of actual areas of valid segments
    pub valid_area: SquareMeters,
    /// Sum of widths of valid segments
    pub valid_width: Meters,
    /// Tallest valid segment
    pub max_valid_height: Meters,
    /// Billing area over all segments
    pub metraje_area: SquareMeters,
}

impl WallItem {
    /// Panel type of each panelled face, face 1 first
    pub fn face_panels(&self) -> Vec<PanelType> {
        std::iter::once(self.face1_panel)
            .chain(self.face2_panel)
            .collect()
    }

    pub fn valid_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.valid_for_materials)
    }
}

impl WallInput {
    /// Check every field, collecting all messages.
    pub fn validate(&self) -> Result<WallItem, Vec<CalcError>> {
        let mut errors = Vec::new();

        let faces = match self.faces {
            Some(f @ 1..=2) => Some(f as u8),
            Some(f) => {
                errors.push(CalcError::invalid_input("face count", f.to_string(), "must be 1 or 2"));
                None
            }
            None => {
                errors.push(CalcError::missing_field("face count"));
                None
            }
        };

        let stud_spacing = positive(self.stud_spacing, "stud spacing").map_err(|e| errors.push(e)).ok();

        let face1_panel = parse_label(&self.face1_panel, "face 1 panel type", PanelType::from_str_flexible)
            .map_err(|e| errors.push(e))
            .ok();

        let face2_panel = if faces == Some(2) {
            parse_label(&self.face2_panel, "face 2 panel type", PanelType::from_str_flexible)
                .map_err(|e| errors.push(e))
                .ok()
        } else {
            None
        };

        let stud_type = parse_label(&self.stud_type, "stud type", StudType::from_str_flexible)
            .map_err(|e| errors.push(e))
            .ok();

        let segments = derive_segments(&self.segments);
        if segments.is_empty() {
            errors.push(CalcError::NoSegments {
                kind: StructureKind::Wall.to_string(),
            });
        } else if !segments.iter().any(|s| s.valid_for_materials) {
            errors.push(CalcError::NoValidSegments {
                kind: StructureKind::Wall.to_string(),
            });
        }

        match (faces, stud_spacing, face1_panel, stud_type) {
            (Some(faces), Some(spacing), Some(face1), Some(stud_type))
                if errors.is_empty() =>
            {
                Ok(build(self, faces, spacing, face1, face2_panel, stud_type, segments))
            }
            _ => Err(errors),
        }
    }
}

fn build(
    input: &WallInput,
    faces: u8,
    spacing: f64,
    face1_panel: PanelType,
    face2_panel: Option<PanelType>,
    stud_type: StudType,
    segments: Vec<Segment>,
) -> WallItem {
    let valid = segments.iter().filter(|s| s.valid_for_materials);
    let valid_area = valid.clone().fold(SquareMeters(0.0), |acc, s| acc + s.area);
    let valid_width: f64 = valid.clone().map(|s| s.width).sum();
    let max_valid_height = valid.map(|s| s.length).fold(0.0, f64::max);
    let metraje_area = segments
        .iter()
        .fold(SquareMeters(0.0), |acc, s| acc + s.metraje_area);

    WallItem {
        faces,
        face1_panel,
        face2_panel,
        stud_spacing: Meters(spacing),
        stud_type,
        double_structure: input.double_structure,
        segments,
        valid_area,
        valid_width: Meters(valid_width),
        max_valid_height: Meters(max_valid_height),
        metraje_area,
    }
}
