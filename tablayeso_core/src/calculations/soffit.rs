//! # Soffits
//!
//! Horizontal soffits run furring along their length, one line per 0.40 m
//! of height, and close both long edges with edge trim. Vertical soffits
//! drop furring hangers every 0.90 m of length.
//!
//! Panel area is estimated over the billed run (metraje: length floored to
//! 1 m, times faces): the mean of width and height times that run, or a
//! 0.30 m profile when the cross-section is unusable.

use tracing::debug;

use crate::accumulator::PanelContribution;
use crate::constants::{
    CAP_NAILS_PER_SOFFIT_FURRING, CEILING_FURRING_SPACING_M, CEILING_SUPPORT_SPACING_M,
    FASTENERS_PER_EDGE_TRIM, FURRING_CHANNEL_LENGTH_M, HANGER_EXTRA_M, PANEL_YIELD_M2, SCREWS_PER_PANEL,
    SCREWS_PER_SOFFIT_FURRING, SOFFIT_PROFILE_HEIGHT_M,
};
use crate::items::{AnchorWall, Orientation, SoffitItem};
use crate::materials::{Material, MaterialQuantities, ScrewLength};
use crate::units::SquareMeters;

use super::trim::edge_trim_bars;
use super::ItemMaterials;

/// Estimated panel area of a soffit over its billed run
pub fn panel_area(run: f64, width: f64, height: f64) -> SquareMeters {
    if run.is_nan() || run <= 0.0 {
        SquareMeters(0.0)
    } else if width > 0.0 && height > 0.0 {
        SquareMeters(run * (width + height) / 2.0)
    } else {
        SquareMeters(run * SOFFIT_PROFILE_HEIGHT_M)
    }
}

pub fn calculate(soffit: &SoffitItem, panel_waste_percent: f64) -> ItemMaterials {
    let mut quantities = MaterialQuantities::new();
    let length = soffit.length.0;
    let height = soffit.height.0;

    match soffit.orientation {
        Orientation::Horizontal => {
            let furring = (height / CEILING_FURRING_SPACING_M).ceil() * length / FURRING_CHANNEL_LENGTH_M;
            let trim = edge_trim_bars(2.0 * length);
            quantities.add(Material::FurringChannel, furring);
            quantities.add(Material::EdgeTrim, trim);
            quantities.add(Material::SCREW_HALF_FINE, furring * SCREWS_PER_SOFFIT_FURRING);

            let trim_fasteners = trim * FASTENERS_PER_EDGE_TRIM;
            match soffit.anchor_wall {
                AnchorWall::Masonry => quantities.add(Material::CapNails, trim_fasteners),
                AnchorWall::Drywall => quantities.add(Material::SCREW_1IN_FINE, trim_fasteners),
            }
            debug!(furring, trim, "horizontal soffit framing computed");
        }
        Orientation::Vertical => {
            let furring =
                (length / CEILING_SUPPORT_SPACING_M).ceil() * (height + HANGER_EXTRA_M) / FURRING_CHANNEL_LENGTH_M;
            quantities.add(Material::FurringChannel, furring);
            quantities.add(Material::CapNails, furring * CAP_NAILS_PER_SOFFIT_FURRING);
            quantities.add(Material::SCREW_HALF_FINE, furring);
            debug!(furring, "vertical soffit framing computed");
        }
    }

    let area = panel_area(soffit.metraje_linear.0, soffit.width.0, height);
    quantities.add(
        Material::screw_for(ScrewLength::OneInch, soffit.panel_type),
        area.0 / PANEL_YIELD_M2 * SCREWS_PER_PANEL,
    );

    ItemMaterials {
        quantities,
        panel_contributions: vec![PanelContribution::item_area(area, soffit.panel_type, panel_waste_percent)],
    }
}
