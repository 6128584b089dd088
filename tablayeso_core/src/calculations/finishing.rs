//! Joint finishing goods for panelled surfaces.
//!
//! Gypsum boards are taped with paper tape, filled with joint compound and
//! sanded. Cement boards take mesh tape and a basecoat, floated with a
//! sponge. Quantities are linear in surface area, so they can be summed
//! contribution by contribution.

use crate::accumulator::PanelContribution;
use crate::constants::{
    BASECOAT_M2_PER_SACK, JOINT_COMPOUND_M2_PER_BOX, PANELS_PER_SPONGE, PANEL_YIELD_M2,
    SANDPAPER_SHEETS_PER_PANEL, TAPE_M_PER_PANEL,
};
use crate::materials::{FinishFamily, Material, MaterialQuantities};

/// Finishing goods for every panelled surface, before waste.
pub fn finishing_goods(contributions: &[PanelContribution]) -> MaterialQuantities {
    let mut quantities = MaterialQuantities::new();
    for c in contributions.iter().filter(|c| c.area.0 > 0.0) {
        let area = c.area.0;
        let panels = area / PANEL_YIELD_M2;
        match c.panel_type.finish_family() {
            FinishFamily::Gypsum => {
                quantities.add(Material::JointCompound, area / JOINT_COMPOUND_M2_PER_BOX);
                quantities.add(Material::PaperTape, panels * TAPE_M_PER_PANEL);
                quantities.add(Material::Sandpaper, panels * SANDPAPER_SHEETS_PER_PANEL);
            }
            FinishFamily::CementBoard => {
                quantities.add(Material::Basecoat, area / BASECOAT_M2_PER_SACK);
                quantities.add(Material::MeshTape, panels * TAPE_M_PER_PANEL);
                quantities.add(Material::FinishingSponge, panels / PANELS_PER_SPONGE);
            }
        }
    }
    quantities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::PanelType;
    use crate::units::SquareMeters;

    #[test]
    fn test_gypsum_surface() {
        let q = finishing_goods(&[PanelContribution::item_area(SquareMeters(22.0), PanelType::FireResistant, 5.0)]);
        assert!((q.get(Material::JointCompound) - 1.0).abs() < 1e-12);
        assert!((q.get(Material::PaperTape) - 22.0 / 2.98 * 7.0).abs() < 1e-9);
        assert!((q.get(Material::Sandpaper) - 22.0 / 2.98 * 0.5).abs() < 1e-9);
        assert!(!q.contains(Material::Basecoat));
    }

    #[test]
    fn test_cement_surface() {
        let q = finishing_goods(&[PanelContribution::wall_segment(SquareMeters(8.0), PanelType::Exterior, 2.0, 4.0)]);
        assert!((q.get(Material::Basecoat) - 1.0).abs() < 1e-12);
        assert!((q.get(Material::MeshTape) - 8.0 / 2.98 * 7.0).abs() < 1e-9);
        assert!((q.get(Material::FinishingSponge) - 8.0 / 2.98 / 15.0).abs() < 1e-9);
        assert!(!q.contains(Material::JointCompound));
    }

    #[test]
    fn test_empty_surface_adds_nothing() {
        let q = finishing_goods(&[PanelContribution::item_area(SquareMeters(0.0), PanelType::Standard, 0.0)]);
        assert!(q.is_empty());
    }
}
