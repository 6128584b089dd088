//! # Wall Framing
//!
//! Studs, track channel, fasteners and panels for a stud partition.
//!
//! ## Stud Count
//!
//! Studs are laid out along the valid width `W` at spacing `S`:
//!
//! ```text
//! columns = 0                 if W <= 0
//!         = 2                 if W < S        (one at each end)
//!         = floor(W / S) + 1  otherwise
//! ```
//!
//! Walls taller than one 3.66 m bar need spliced studs, each splice adding
//! 0.30 m of overlap:
//!
//! ```text
//! studs = columns                                if H <= 3.66
//!       = ceil(columns * (H + 0.30) / 3.66)      otherwise
//! ```
//!
//! A double structure doubles studs, track and the fasteners that follow
//! from them.

use tracing::debug;

use crate::accumulator::PanelContribution;
use crate::constants::{
    CAP_NAILS_PER_TRACK, PANEL_YIELD_M2, SCREWS_PER_PANEL, SCREWS_PER_STUD, STUD_MAX_LENGTH_M,
    STUD_SPLICE_M, TRACK_CHANNEL_LENGTH_M,
};
use crate::items::WallItem;
use crate::materials::{Material, MaterialQuantities, ScrewLength};

use super::ItemMaterials;

/// Stud columns along a run of `width` at `spacing`
pub fn stud_columns(width: f64, spacing: f64) -> f64 {
    if width <= 0.0 || spacing <= 0.0 {
        0.0
    } else if width < spacing {
        2.0
    } else {
        (width / spacing).floor() + 1.0
    }
}

/// Stud bars for `columns` columns of `height`, splicing when needed
pub fn stud_bars(columns: f64, height: f64) -> f64 {
    if height <= 0.0 || columns <= 0.0 {
        0.0
    } else if height <= STUD_MAX_LENGTH_M {
        columns
    } else {
        (columns * (height + STUD_SPLICE_M) / STUD_MAX_LENGTH_M).ceil()
    }
}

pub fn calculate(wall: &WallItem) -> ItemMaterials {
    let mut quantities = MaterialQuantities::new();
    let structures = if wall.double_structure { 2.0 } else { 1.0 };
    let width = wall.valid_width.0;
    let height = wall.max_valid_height.0;

    let columns = stud_columns(width, wall.stud_spacing.0);
    let studs = stud_bars(columns, height);
    quantities.add(Material::Stud(wall.stud_type), studs * structures);

    if width > 0.0 {
        let track = width * 2.0 / TRACK_CHANNEL_LENGTH_M * structures;
        let track_material = if wall.face1_panel.is_exterior() {
            Material::HeavyTrackChannel
        } else {
            Material::TrackChannel
        };
        quantities.add(track_material, track);
        quantities.add(Material::CapNails, track * CAP_NAILS_PER_TRACK);
    }

    let faces = wall.face_panels();
    let estimated_panels = wall.valid_area.0 / PANEL_YIELD_M2;
    for panel in &faces {
        let per_face = estimated_panels / faces.len() as f64;
        quantities.add(
            Material::screw_for(ScrewLength::OneInch, *panel),
            per_face * SCREWS_PER_PANEL,
        );
    }

    let framing_screws = studs * structures * SCREWS_PER_STUD;
    if faces.iter().any(|p| p.is_exterior()) {
        quantities.add(Material::SCREW_HALF_DRILL, framing_screws);
    }
    if faces.iter().any(|p| !p.is_exterior()) {
        quantities.add(Material::SCREW_HALF_FINE, framing_screws);
    }

    let panel_contributions: Vec<PanelContribution> = wall
        .valid_segments()
        .flat_map(|seg| {
            faces
                .iter()
                .map(move |panel| PanelContribution::wall_segment(seg.area, *panel, seg.width, seg.length))
        })
        .collect();

    debug!(
        columns,
        studs,
        contributions = panel_contributions.len(),
        "wall framing computed"
    );

    ItemMaterials {
        quantities,
        panel_contributions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{SegmentInput, WallInput};
    use crate::materials::{PanelType, StudType};

    fn wall(faces: i64, face1: &str, face2: Option<&str>, double: bool, segments: Vec<SegmentInput>) -> WallItem {
        WallInput {
            faces: Some(faces),
            face1_panel: Some(face1.to_string()),
            face2_panel: face2.map(str::to_string),
            stud_spacing: Some(0.40),
            stud_type: Some("8ft-cal26".to_string()),
            double_structure: double,
            segments,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_stud_columns_boundaries() {
        assert_eq!(stud_columns(0.40, 0.40), 2.0);
        assert_eq!(stud_columns(0.39, 0.40), 2.0);
        assert_eq!(stud_columns(3.0, 0.40), 8.0);
        assert_eq!(stud_columns(0.0, 0.40), 0.0);
    }

    #[test]
    fn test_stud_splicing() {
        assert_eq!(stud_bars(8.0, 3.66), 8.0);
        // 8 * 4.30 / 3.66 = 9.399
        assert_eq!(stud_bars(8.0, 4.0), 10.0);
        assert_eq!(stud_bars(8.0, 0.0), 0.0);
        assert_eq!(stud_bars(0.0, 2.4), 0.0);
    }

    #[test]
    fn test_single_face_standard_wall() {
        let item = wall(1, "Normal", None, false, vec![SegmentInput::new(3.0, 2.4)]);
        let result = calculate(&item);
        let q = &result.quantities;
        assert_eq!(q.get(Material::Stud(StudType::Ft8Cal26)), 8.0);
        assert!((q.get(Material::TrackChannel) - 6.0 / 3.05).abs() < 1e-9);
        assert!((q.get(Material::CapNails) - 15.737704918).abs() < 1e-6);
        assert!((q.get(Material::SCREW_1IN_FINE) - 96.644295302).abs() < 1e-6);
        assert_eq!(q.get(Material::SCREW_HALF_FINE), 32.0);
        assert_eq!(q.get(Material::SCREW_HALF_DRILL), 0.0);
        assert!(!q.contains(Material::HeavyTrackChannel));

        assert_eq!(result.panel_contributions.len(), 1);
        assert_eq!(result.panel_contributions[0].panel_type, PanelType::Standard);
        assert_eq!(result.panel_contributions[0].waste_percent, 0.0);
    }

    #[test]
    fn test_exterior_face_one_uses_heavy_track() {
        let item = wall(1, "Exterior", None, false, vec![SegmentInput::new(3.0, 2.4)]);
        let q = calculate(&item).quantities;
        assert!(q.get(Material::HeavyTrackChannel) > 0.0);
        assert!(!q.contains(Material::TrackChannel));
        assert_eq!(q.get(Material::SCREW_HALF_DRILL), 32.0);
        assert_eq!(q.get(Material::SCREW_HALF_FINE), 0.0);
        assert!(q.get(Material::SCREW_1IN_DRILL) > 0.0);
    }

    #[test]
    fn test_mixed_faces_get_both_framing_screws() {
        let item = wall(2, "Normal", Some("Exterior"), false, vec![SegmentInput::new(3.0, 2.4)]);
        let result = calculate(&item);
        let q = &result.quantities;
        assert_eq!(q.get(Material::SCREW_HALF_DRILL), 32.0);
        assert_eq!(q.get(Material::SCREW_HALF_FINE), 32.0);
        // each face gets half the panel estimate
        assert!((q.get(Material::SCREW_1IN_FINE) - q.get(Material::SCREW_1IN_DRILL)).abs() < 1e-9);
        assert!(q.contains(Material::TrackChannel));
        assert_eq!(result.panel_contributions.len(), 2);
    }

    #[test]
    fn test_double_structure() {
        let item = wall(1, "Normal", None, true, vec![SegmentInput::new(3.0, 2.4)]);
        let q = calculate(&item).quantities;
        assert_eq!(q.get(Material::Stud(StudType::Ft8Cal26)), 16.0);
        assert!((q.get(Material::TrackChannel) - 12.0 / 3.05).abs() < 1e-9);
        assert_eq!(q.get(Material::SCREW_HALF_FINE), 64.0);
    }

    #[test]
    fn test_contribution_per_valid_segment_and_face() {
        let item = wall(
            2,
            "Normal",
            Some("Normal"),
            false,
            vec![SegmentInput::new(0.5, 2.0), SegmentInput::new(0.0, 2.0), SegmentInput::new(2.0, 2.4)],
        );
        let result = calculate(&item);
        assert_eq!(result.panel_contributions.len(), 4);
        assert!(result.panel_contributions[0].is_small());
        assert!(!result.panel_contributions[2].is_small());
    }
}
