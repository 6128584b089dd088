//! # Aggregation & Adjustment
//!
//! Turns the per-item float maps into the final bill of materials:
//!
//! 1. Sum every item map into a project map seeded with every non-panel
//!    material at zero
//! 2. Firing caps follow cap nails one to one
//! 3. Merge the finalized panel counts
//! 4. Round up, apply the global waste, round up again, then package
//! 5. Drop anything that came out at zero
//!
//! The double rounding is part of the trade rule: `47.2` becomes `48`,
//! then `48 * 1.05 = 50.4`, then `51`.

use tracing::debug;

use crate::materials::{BillOfMaterials, Material, MaterialLine, MaterialQuantities};

/// Converts a loose purchasable quantity into what is actually ordered.
///
/// Implementations can round up to boxes, bundles or bar packs per
/// material. The result is in the same unit as the input.
pub trait Packaging {
    fn package(&self, material: Material, quantity: u64) -> u64;
}

/// Everything is sold loose; quantities pass through unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct LooseUnits;

impl Packaging for LooseUnits {
    fn package(&self, _material: Material, quantity: u64) -> u64 {
        quantity
    }
}

/// Sum item maps into a seeded project map and derive firing caps.
pub fn aggregate<'a>(items: impl IntoIterator<Item = &'a MaterialQuantities>) -> MaterialQuantities {
    let mut totals = MaterialQuantities::seeded();
    for item in items {
        totals.merge(item);
    }
    totals.set(Material::FiringCaps, totals.get(Material::CapNails));
    totals
}

/// Purchasable quantity for a raw float total: `ceil(ceil(q) * (1 + waste))`.
///
/// Non-positive and NaN inputs yield 0.
pub fn purchasable(quantity: f64, waste_percent: f64) -> u64 {
    let whole = quantity.ceil();
    if whole.is_nan() || whole <= 0.0 {
        return 0;
    }
    let with_waste = (whole * (1.0 + waste_percent / 100.0)).ceil();
    if with_waste.is_nan() || with_waste <= 0.0 {
        0
    } else {
        with_waste as u64
    }
}

/// Apply rounding, waste and packaging to project totals and panel counts.
pub fn adjust(
    totals: &MaterialQuantities,
    panels: &MaterialQuantities,
    waste_percent: f64,
    packaging: &dyn Packaging,
) -> BillOfMaterials {
    let mut merged = totals.clone();
    merged.merge(panels);

    let lines: Vec<MaterialLine> = merged
        .iter()
        .filter_map(|(material, quantity)| {
            let packaged = packaging.package(material, purchasable(quantity, waste_percent));
            (packaged > 0).then(|| MaterialLine::new(material, packaged))
        })
        .collect();

    debug!(lines = lines.len(), waste_percent, "bill of materials adjusted");
    BillOfMaterials { lines }
}
