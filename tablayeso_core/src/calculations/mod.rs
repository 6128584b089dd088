//! # Material Calculations
//!
//! Per-item material take-off. Each structure kind follows the same
//! pattern:
//!
//! - a validated item from [`crate::items`] goes in
//! - [`ItemMaterials`] comes out: fractional quantities per material, plus
//!   the panelled surfaces handed to the project-wide panel accumulator
//!
//! Calculations are pure. Rounding, waste and packaging happen later, once,
//! across the whole project (see [`crate::pipeline`]).
//!
//! ## Available Calculations
//!
//! - [`wall`] - Stud partitions, one or two faces, optional double structure
//! - [`ceiling`] - Suspended furring grid with hangers and edge trim
//! - [`soffit`] - Horizontal or vertical soffits
//! - [`finishing`] - Joint finishing goods for any panelled surface

pub mod ceiling;
pub mod finishing;
pub mod soffit;
pub mod trim;
pub mod wall;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::accumulator::PanelContribution;
use crate::errors::{CalcError, CalcResult};
use crate::items::{ItemDetail, ValidatedItem};
use crate::materials::MaterialQuantities;
use crate::project::EstimatorSettings;

/// Material take-off of one item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemMaterials {
    pub quantities: MaterialQuantities,
    pub panel_contributions: Vec<PanelContribution>,
}

/// Summary of one item's take-off, kept in the report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemMaterialSummary {
    /// Panelled surface in m², over all faces
    pub panel_area: f64,
    pub panel_contributions: usize,
}

impl ItemMaterials {
    pub fn summary(&self) -> ItemMaterialSummary {
        ItemMaterialSummary {
            panel_area: self.panel_contributions.iter().map(|c| c.area.0).sum(),
            panel_contributions: self.panel_contributions.len(),
        }
    }
}

/// Compute one validated item's materials.
///
/// Returns `CalculationFailed` if any quantity comes out NaN or infinite.
pub fn calculate(item: &ValidatedItem, settings: &EstimatorSettings) -> CalcResult<ItemMaterials> {
    let mut materials = match &item.detail {
        ItemDetail::Wall(wall) => wall::calculate(wall),
        ItemDetail::Ceiling(ceiling) => ceiling::calculate(ceiling),
        ItemDetail::Soffit(soffit) => soffit::calculate(soffit, settings.soffit_panel_waste_percent),
    };

    if settings.include_finishing {
        let goods = finishing::finishing_goods(&materials.panel_contributions);
        materials.quantities.merge(&goods);
    }

    if let Some((material, value)) = materials.quantities.first_non_finite() {
        return Err(CalcError::calculation_failed(
            item.kind().display_name(),
            format!("{} came out as {}", material, value),
        ));
    }
    if let Some(c) = materials.panel_contributions.iter().find(|c| !c.area.0.is_finite()) {
        return Err(CalcError::calculation_failed(
            item.kind().display_name(),
            format!("panel area for {} came out as {}", c.panel_type, c.area.0),
        ));
    }

    debug!(
        item = %item.label(),
        materials = materials.quantities.len(),
        contributions = materials.panel_contributions.len(),
        "item materials computed"
    );
    Ok(materials)
}
