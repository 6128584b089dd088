//! Panel finishes and the properties that follow from them.
//!
//! A panel type drives three choices downstream: which finishing family
//! applies, which screw tip fastens it, and (for wall face 1) whether the
//! track channel must be the heavier gauge.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

use super::normalize_label;

/// Panel finishes offered by the estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PanelType {
    /// Regular gypsum board ("Normal")
    Standard,
    /// Moisture-resistant gypsum board ("Resistente a la Humedad")
    MoistureResistant,
    /// Fire-rated gypsum board ("Resistente al Fuego")
    FireResistant,
    /// Abuse/impact-resistant gypsum board ("Alta Resistencia")
    HighImpact,
    /// Cement board for exterior or wet use
    Exterior,
}

/// Finishing material family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinishFamily {
    /// Joint compound, paper tape, sandpaper
    Gypsum,
    /// Basecoat, mesh tape, sponge
    CementBoard,
}

/// Screw tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScrewTip {
    /// Fine thread, sharp point ("punta fina")
    Fine,
    /// Self-drilling ("punta broca")
    SelfDrilling,
}

impl PanelType {
    /// All panel types, in catalogue order
    pub const ALL: [PanelType; 5] = [
        PanelType::Standard,
        PanelType::MoistureResistant,
        PanelType::FireResistant,
        PanelType::HighImpact,
        PanelType::Exterior,
    ];

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PanelType::Standard => "Standard",
            PanelType::MoistureResistant => "Moisture Resistant",
            PanelType::FireResistant => "Fire Resistant",
            PanelType::HighImpact => "High Impact",
            PanelType::Exterior => "Exterior",
        }
    }

    /// Trade label used on the distributor's price list
    pub fn trade_label(&self) -> &'static str {
        match self {
            PanelType::Standard => "Normal",
            PanelType::MoistureResistant => "Resistente a la Humedad",
            PanelType::FireResistant => "Resistente al Fuego",
            PanelType::HighImpact => "Alta Resistencia",
            PanelType::Exterior => "Exterior",
        }
    }

    /// Parse from the English name, the variant name or the trade label
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let key = normalize_label(s);
        PanelType::ALL
            .into_iter()
            .find(|p| {
                key == normalize_label(p.display_name())
                    || key == normalize_label(p.trade_label())
                    || key == normalize_label(&format!("{:?}", p))
            })
            .ok_or_else(|| CalcError::unknown_option("panel type", s))
    }

    pub fn is_exterior(&self) -> bool {
        matches!(self, PanelType::Exterior)
    }

    pub fn finish_family(&self) -> FinishFamily {
        if self.is_exterior() {
            FinishFamily::CementBoard
        } else {
            FinishFamily::Gypsum
        }
    }

    pub fn screw_tip(&self) -> ScrewTip {
        if self.is_exterior() {
            ScrewTip::SelfDrilling
        } else {
            ScrewTip::Fine
        }
    }
}

impl Default for PanelType {
    fn default() -> Self {
        PanelType::Standard
    }
}

impl std::fmt::Display for PanelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl ScrewTip {
    pub fn display_name(&self) -> &'static str {
        match self {
            ScrewTip::Fine => "Fine-Thread",
            ScrewTip::SelfDrilling => "Self-Drilling",
        }
    }
}
