//! # Suspended Ceiling
//!
//! A ceiling grid has three layers:
//!
//! 1. **Furring channels** at 0.40 m, carrying the panels
//! 2. **Support channels** at 0.90 m, carrying the furring
//! 3. **Hangers** on a 0.90 m grid, each a length of furring channel cut to
//!    the plenum depth plus 0.10 m
//!
//! The perimeter gets edge trim, less whatever length the user deducts
//! (openings, walls that already carry a trim).

use tracing::debug;

use crate::accumulator::PanelContribution;
use crate::constants::{
    CEILING_FURRING_SPACING_M, CEILING_SUPPORT_SPACING_M, FASTENERS_PER_EDGE_TRIM, FASTENERS_PER_HANGER,
    FURRING_CHANNEL_LENGTH_M, HANGER_EXTRA_M, PANEL_YIELD_M2, SCREWS_PER_FURRING, SCREWS_PER_PANEL,
    SUPPORT_CHANNEL_LENGTH_M, SUPPORT_EXTRA_FACTOR,
};
use crate::items::CeilingItem;
use crate::materials::{Material, MaterialQuantities};

use super::trim::edge_trim_bars;
use super::ItemMaterials;

/// Hanger points on the support grid
pub fn hanger_legs(width_sum: f64, length_sum: f64) -> f64 {
    if width_sum <= 0.0 || length_sum <= 0.0 {
        return 0.0;
    }
    (length_sum / CEILING_SUPPORT_SPACING_M).ceil() * (width_sum / CEILING_SUPPORT_SPACING_M).ceil()
}

/// Support channel bars, with extra for runs longer than one bar
pub fn support_channels(width_sum: f64, length_sum: f64) -> f64 {
    if width_sum <= 0.0 || length_sum <= 0.0 {
        return 0.0;
    }
    let rows = (width_sum / CEILING_SUPPORT_SPACING_M).floor();
    let bars = rows * length_sum / SUPPORT_CHANNEL_LENGTH_M;
    if length_sum > SUPPORT_CHANNEL_LENGTH_M {
        bars * (1.0 + SUPPORT_EXTRA_FACTOR)
    } else {
        bars
    }
}

pub fn calculate(ceiling: &CeilingItem) -> ItemMaterials {
    let mut quantities = MaterialQuantities::new();
    let area = ceiling.valid_area.0;
    let width_sum = ceiling.width_sum.0;
    let length_sum = ceiling.length_sum.0;

    let furring = if area > 0.0 {
        area / CEILING_FURRING_SPACING_M / FURRING_CHANNEL_LENGTH_M
    } else {
        0.0
    };
    quantities.add(Material::FurringChannel, furring);
    quantities.add(Material::SupportChannel, support_channels(width_sum, length_sum));

    let legs = hanger_legs(width_sum, length_sum);
    quantities.add(Material::HangerLegs, legs);
    quantities.add(
        Material::HangerChannel,
        legs * (ceiling.plenum.0 + HANGER_EXTRA_M) / FURRING_CHANNEL_LENGTH_M,
    );

    let trim_run = (ceiling.perimeter.0 - ceiling.trim_deduction.0).max(0.0);
    let trim = edge_trim_bars(trim_run);
    quantities.add(Material::EdgeTrim, trim);
    quantities.add(
        Material::CapNails,
        trim * FASTENERS_PER_EDGE_TRIM + legs * FASTENERS_PER_HANGER,
    );

    quantities.add(Material::SCREW_1IN_FINE, area / PANEL_YIELD_M2 * SCREWS_PER_PANEL);
    quantities.add(
        Material::SCREW_HALF_FINE,
        furring * SCREWS_PER_FURRING + legs * FASTENERS_PER_HANGER,
    );

    debug!(furring, legs, trim_run, "ceiling grid computed");

    ItemMaterials {
        quantities,
        panel_contributions: vec![PanelContribution::item_area(
            ceiling.valid_area,
            ceiling.panel_type,
            ceiling.panel_waste_percent,
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{CeilingInput, SegmentInput};
    use crate::materials::PanelType;

    fn ceiling(width: f64, length: f64, plenum: f64, deduction: f64) -> CeilingItem {
        CeilingInput {
            panel_type: Some("Normal".to_string()),
            plenum: Some(plenum),
            trim_deduction: Some(deduction),
            panel_waste_percent: Some(5.0),
            segments: vec![SegmentInput::new(width, length)],
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_grid_quantities() {
        let item = ceiling(3.0, 4.0, 0.5, 0.0);
        let q = calculate(&item).quantities;

        // 12 / 0.40 / 3.66
        assert!((q.get(Material::FurringChannel) - 8.196721311).abs() < 1e-6);
        // floor(3/0.9) = 3 rows, 3 * 4 / 3.66 * 1.30
        assert!((q.get(Material::SupportChannel) - 3.0 * 4.0 / 3.66 * 1.3).abs() < 1e-9);
        // ceil(4/0.9) * ceil(3/0.9) = 5 * 4
        assert_eq!(q.get(Material::HangerLegs), 20.0);
        assert!((q.get(Material::HangerChannel) - 20.0 * 0.6 / 3.66).abs() < 1e-9);
        assert!((q.get(Material::SCREW_1IN_FINE) - 12.0 / 2.98 * 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_run_has_no_support_extra() {
        assert!((support_channels(2.0, 3.0) - 2.0 * 3.0 / 3.66).abs() < 1e-9);
        assert_eq!(support_channels(0.0, 3.0), 0.0);
        assert_eq!(support_channels(0.5, 3.0), 0.0);
    }

    #[test]
    fn test_edge_trim_and_fasteners() {
        // perimeter 2 * (2 + 3) = 10, no deduction
        let item = ceiling(2.0, 3.0, 0.3, 0.0);
        let q = calculate(&item).quantities;
        let trim = 10.6 / 2.44;
        assert!((q.get(Material::EdgeTrim) - trim).abs() < 1e-9);
        let legs = (3.0f64 / 0.9).ceil() * (2.0f64 / 0.9).ceil();
        assert!((q.get(Material::CapNails) - (trim * 5.0 + legs * 2.0)).abs() < 1e-9);
        let furring = 6.0 / 0.40 / 3.66;
        assert!((q.get(Material::SCREW_HALF_FINE) - (furring * 12.0 + legs * 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_deduction_beyond_perimeter_clamps() {
        let item = ceiling(2.0, 3.0, 0.3, 50.0);
        let q = calculate(&item).quantities;
        assert_eq!(q.get(Material::EdgeTrim), 0.0);
    }

    #[test]
    fn test_single_contribution_with_item_waste() {
        let result = calculate(&ceiling(1.0, 1.2, 0.3, 0.0));
        assert_eq!(result.panel_contributions.len(), 1);
        let c = &result.panel_contributions[0];
        assert_eq!(c.panel_type, PanelType::Standard);
        assert_eq!(c.waste_percent, 5.0);
        assert!(c.is_small());
    }
}
