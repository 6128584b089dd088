//! # Panel Accumulator
//!
//! Panels are counted across the whole project, not per item. Small pieces
//! (narrow wall strips, tiny ceilings and soffits) are cut from offcuts, so
//! their fractional panel counts are pooled per panel type and rounded up
//! once at the end. Everything else is rounded up per contribution.
//!
//! Finalizing is a pure function of the multiset of contributions: the order
//! they were added in never matters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{PANEL_YIELD_M2, SMALL_ITEM_AREA_M2, SMALL_SEGMENT_HEIGHT_M, SMALL_SEGMENT_WIDTH_M};
use crate::materials::{Material, MaterialQuantities, PanelType};
use crate::units::SquareMeters;

/// What a contribution was measured from, which decides if it is small
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ContributionShape {
    /// One face of one wall segment, with its raw dimensions
    WallSegment { width: f64, height: f64 },
    /// A whole ceiling or soffit
    ItemArea,
}

/// A panelled surface waiting to be counted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelContribution {
    pub area: SquareMeters,
    pub panel_type: PanelType,
    pub waste_percent: f64,
    pub shape: ContributionShape,
}

impl PanelContribution {
    pub fn wall_segment(area: SquareMeters, panel_type: PanelType, width: f64, height: f64) -> Self {
        PanelContribution {
            area,
            panel_type,
            waste_percent: 0.0,
            shape: ContributionShape::WallSegment { width, height },
        }
    }

    pub fn item_area(area: SquareMeters, panel_type: PanelType, waste_percent: f64) -> Self {
        PanelContribution {
            area,
            panel_type,
            waste_percent,
            shape: ContributionShape::ItemArea,
        }
    }

    /// Whether this piece is pooled with other offcuts
    pub fn is_small(&self) -> bool {
        match self.shape {
            ContributionShape::WallSegment { width, height } => {
                width < SMALL_SEGMENT_WIDTH_M && height < SMALL_SEGMENT_HEIGHT_M
            }
            ContributionShape::ItemArea => self.area.0 < SMALL_ITEM_AREA_M2,
        }
    }

    /// Fractional panels including waste
    pub fn panels(&self) -> f64 {
        self.area.0 / PANEL_YIELD_M2 * (1.0 + self.waste_percent / 100.0)
    }
}

/// Running totals for one panel type
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelAccumulatorEntry {
    pub fractional_small_sum: f64,
    pub rounded_other_sum: u64,
}

impl PanelAccumulatorEntry {
    pub fn total(&self) -> u64 {
        self.fractional_small_sum.ceil() as u64 + self.rounded_other_sum
    }
}

/// Project-wide panel counter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelAccumulator {
    entries: BTreeMap<PanelType, PanelAccumulatorEntry>,
}

impl PanelAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one contribution. Non-positive areas are ignored.
    pub fn add(&mut self, contribution: &PanelContribution) {
        if contribution.area.0.is_nan() || contribution.area.0 <= 0.0 {
            return;
        }
        let panels = contribution.panels();
        let entry = self.entries.entry(contribution.panel_type).or_default();
        if contribution.is_small() {
            entry.fractional_small_sum += panels;
        } else {
            entry.rounded_other_sum += panels.ceil() as u64;
        }
    }

    pub fn extend<'a>(&mut self, contributions: impl IntoIterator<Item = &'a PanelContribution>) {
        for c in contributions {
            self.add(c);
        }
    }

    pub fn entry(&self, panel_type: PanelType) -> PanelAccumulatorEntry {
        self.entries.get(&panel_type).copied().unwrap_or_default()
    }

    /// Whole panel counts per type, only types with a count > 0
    pub fn finalize(&self) -> MaterialQuantities {
        let mut panels = MaterialQuantities::new();
        for (panel_type, entry) in &self.entries {
            let total = entry.total();
            if total > 0 {
                panels.set(Material::Panel(*panel_type), total as f64);
            }
        }
        panels
    }
}
