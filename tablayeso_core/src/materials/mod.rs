//! # Materials Catalogue
//!
//! Every material the estimator can put on a bill, as a closed enum. Each
//! kind carries its sale unit, so reports never have to guess a unit from a
//! name.
//!
//! ## Material Groups
//!
//! - **Panels**: one line per [`PanelType`]
//! - **Framing**: studs per [`StudType`], track channels, furring and
//!   support channels, edge trim
//! - **Fasteners**: cap nails, firing caps, 1" and 1/2" screws by tip
//! - **Finishing**: gypsum family or cement-board family goods
//! - **Hanger intermediates**: hanger legs and the furring cut for them
//!
//! ## Example
//!
//! ```rust
//! use tablayeso_core::materials::{Material, MaterialUnit, PanelType, ScrewLength, ScrewTip};
//!
//! let panels = Material::Panel(PanelType::Exterior);
//! assert_eq!(panels.display_name(), "Panels of Exterior");
//! assert_eq!(panels.unit(), MaterialUnit::Unit);
//!
//! let screws = Material::Screw { length: ScrewLength::OneInch, tip: ScrewTip::Fine };
//! assert_eq!(screws.display_name(), "1\" Fine-Thread Screws");
//! assert_eq!(Material::JointCompound.unit(), MaterialUnit::Box);
//! ```

pub mod panel;
pub mod stud;

pub use panel::{FinishFamily, PanelType, ScrewTip};
pub use stud::StudType;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sale unit of a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialUnit {
    /// Single pieces ("Und")
    Unit,
    /// Boxes ("Caja")
    Box,
    /// Linear meters ("m")
    LinearMeter,
    /// Sheets ("Pliego")
    Sheet,
    /// Sacks ("Saco")
    Sack,
}

impl MaterialUnit {
    /// Short symbol used in reports
    pub fn symbol(&self) -> &'static str {
        match self {
            MaterialUnit::Unit => "pcs",
            MaterialUnit::Box => "box",
            MaterialUnit::LinearMeter => "m",
            MaterialUnit::Sheet => "sheet",
            MaterialUnit::Sack => "sack",
        }
    }
}

impl std::fmt::Display for MaterialUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Screw length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScrewLength {
    /// 1" panel screws
    OneInch,
    /// 1/2" framing screws
    HalfInch,
}

impl ScrewLength {
    pub fn label(&self) -> &'static str {
        match self {
            ScrewLength::OneInch => "1\"",
            ScrewLength::HalfInch => "1/2\"",
        }
    }
}

/// A purchasable (or intermediate) material.
///
/// ## JSON Serialization
///
/// ```json
/// { "Panel": "Exterior" }
/// { "Stud": "8ft-cal26" }
/// "CapNails"
/// { "Screw": { "length": "HalfInch", "tip": "SelfDrilling" } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Material {
    Panel(PanelType),
    Stud(StudType),
    /// Wall track ("Canales")
    TrackChannel,
    /// Heavier gauge wall track for exterior panels ("Canales Calibre 20")
    HeavyTrackChannel,
    /// Furring / main runner channel ("Canal Liston")
    FurringChannel,
    /// Ceiling support channel ("Canal Soporte")
    SupportChannel,
    /// Perimeter angle ("Angular de Lamina")
    EdgeTrim,
    /// Hanger leg count ("Patas"), feeds the hanger channel
    HangerLegs,
    /// Furring bars cut into hanger legs ("Canal Liston para cuelgue")
    HangerChannel,
    /// Washer-head nails ("Clavos con Roldana")
    CapNails,
    /// Powder-actuated loads, one per cap nail ("Fulminantes")
    FiringCaps,
    Screw { length: ScrewLength, tip: ScrewTip },
    /// Gypsum family
    JointCompound,
    /// Gypsum family
    PaperTape,
    /// Gypsum family ("Lija Grano 120")
    Sandpaper,
    /// Cement-board family
    Basecoat,
    /// Cement-board family
    MeshTape,
    /// Cement-board family
    FinishingSponge,
}

impl Material {
    /// 1" fine-thread screws
    pub const SCREW_1IN_FINE: Material = Material::Screw {
        length: ScrewLength::OneInch,
        tip: ScrewTip::Fine,
    };
    /// 1" self-drilling screws
    pub const SCREW_1IN_DRILL: Material = Material::Screw {
        length: ScrewLength::OneInch,
        tip: ScrewTip::SelfDrilling,
    };
    /// 1/2" fine-thread screws
    pub const SCREW_HALF_FINE: Material = Material::Screw {
        length: ScrewLength::HalfInch,
        tip: ScrewTip::Fine,
    };
    /// 1/2" self-drilling screws
    pub const SCREW_HALF_DRILL: Material = Material::Screw {
        length: ScrewLength::HalfInch,
        tip: ScrewTip::SelfDrilling,
    };

    /// Screw of the given length with the tip the panel calls for
    pub fn screw_for(length: ScrewLength, panel: PanelType) -> Material {
        Material::Screw {
            length,
            tip: panel.screw_tip(),
        }
    }

    /// Every non-panel material, in report order.
    ///
    /// Panels are produced by the accumulator and merged separately.
    pub fn non_panel() -> Vec<Material> {
        let mut all: Vec<Material> = StudType::ALL.into_iter().map(Material::Stud).collect();
        all.extend([
            Material::TrackChannel,
            Material::HeavyTrackChannel,
            Material::FurringChannel,
            Material::SupportChannel,
            Material::EdgeTrim,
            Material::HangerLegs,
            Material::HangerChannel,
            Material::CapNails,
            Material::FiringCaps,
            Material::SCREW_1IN_FINE,
            Material::SCREW_1IN_DRILL,
            Material::SCREW_HALF_FINE,
            Material::SCREW_HALF_DRILL,
            Material::JointCompound,
            Material::PaperTape,
            Material::Sandpaper,
            Material::Basecoat,
            Material::MeshTape,
            Material::FinishingSponge,
        ]);
        all
    }

    /// Sale unit
    pub fn unit(&self) -> MaterialUnit {
        match self {
            Material::JointCompound => MaterialUnit::Box,
            Material::PaperTape | Material::MeshTape => MaterialUnit::LinearMeter,
            Material::Sandpaper => MaterialUnit::Sheet,
            Material::Basecoat => MaterialUnit::Sack,
            _ => MaterialUnit::Unit,
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> String {
        match self {
            Material::Panel(p) => format!("Panels of {}", p.display_name()),
            Material::Stud(s) => s.display_name().to_string(),
            Material::TrackChannel => "Track Channel".to_string(),
            Material::HeavyTrackChannel => "Track Channel Cal 20".to_string(),
            Material::FurringChannel => "Furring Channel".to_string(),
            Material::SupportChannel => "Support Channel".to_string(),
            Material::EdgeTrim => "Edge Trim Angle".to_string(),
            Material::HangerLegs => "Hanger Legs".to_string(),
            Material::HangerChannel => "Furring Channel (hangers)".to_string(),
            Material::CapNails => "Cap Nails".to_string(),
            Material::FiringCaps => "Firing Caps".to_string(),
            Material::Screw { length, tip } => {
                format!("{} {} Screws", length.label(), tip.display_name())
            }
            Material::JointCompound => "Joint Compound".to_string(),
            Material::PaperTape => "Paper Tape".to_string(),
            Material::Sandpaper => "Sandpaper Grit 120".to_string(),
            Material::Basecoat => "Basecoat".to_string(),
            Material::MeshTape => "Mesh Tape".to_string(),
            Material::FinishingSponge => "Finishing Sponge".to_string(),
        }
    }

    /// Intermediate quantities that only exist to derive hanger material
    pub fn is_intermediate(&self) -> bool {
        matches!(self, Material::HangerLegs | Material::HangerChannel)
    }

    pub fn is_panel(&self) -> bool {
        matches!(self, Material::Panel(_))
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Floating-point material quantities, before global rounding.
///
/// Used both for a single item's contribution and for the project-wide sum.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialQuantities {
    quantities: BTreeMap<Material, f64>,
}

impl MaterialQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding every non-panel material at 0.0
    pub fn seeded() -> Self {
        let mut map = Self::new();
        for material in Material::non_panel() {
            map.quantities.insert(material, 0.0);
        }
        map
    }

    /// Add to a material's running quantity
    pub fn add(&mut self, material: Material, quantity: f64) {
        *self.quantities.entry(material).or_insert(0.0) += quantity;
    }

    /// Overwrite a material's quantity
    pub fn set(&mut self, material: Material, quantity: f64) {
        self.quantities.insert(material, quantity);
    }

    /// Quantity of a material (0.0 if absent)
    pub fn get(&self, material: Material) -> f64 {
        self.quantities.get(&material).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, material: Material) -> bool {
        self.quantities.contains_key(&material)
    }

    /// Sum another map into this one
    pub fn merge(&mut self, other: &MaterialQuantities) {
        for (material, quantity) in other.iter() {
            self.add(material, quantity);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Material, f64)> + '_ {
        self.quantities.iter().map(|(m, q)| (*m, *q))
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// First material whose quantity is NaN or infinite
    pub fn first_non_finite(&self) -> Option<(Material, f64)> {
        self.iter().find(|(_, q)| !q.is_finite())
    }
}

/// One line of the final bill of materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLine {
    pub material: Material,
    /// Display name, derived from `material`
    pub name: String,
    pub unit: MaterialUnit,
    /// Purchasable quantity after rounding, waste and packaging
    pub quantity: u64,
}

impl MaterialLine {
    pub fn new(material: Material, quantity: u64) -> Self {
        MaterialLine {
            material,
            name: material.display_name(),
            unit: material.unit(),
            quantity,
        }
    }
}

/// Final purchasable quantities, every line > 0
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillOfMaterials {
    pub lines: Vec<MaterialLine>,
}

impl BillOfMaterials {
    /// Quantity for a material, if it made it onto the bill
    pub fn quantity(&self, material: Material) -> Option<u64> {
        self.lines
            .iter()
            .find(|line| line.material == material)
            .map(|line| line.quantity)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Normalize a free-text label for lenient comparison: case, spacing,
/// punctuation and Spanish accents are ignored.
pub(crate) fn normalize_label(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'á' | 'Á' => 'a',
            'é' | 'É' => 'e',
            'í' | 'Í' => 'i',
            'ó' | 'Ó' => 'o',
            'ú' | 'Ú' => 'u',
            'ñ' | 'Ñ' => 'n',
            other => other,
        })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '"' | '\'' | '/'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
