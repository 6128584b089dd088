//! Soffit (cenefa) input and validation.
//!
//! A soffit is a linear drop along a wall or ceiling edge, described by its
//! length and cross-section (width x height). It is billed by the linear
//! meter rather than by area.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{normalize_label, PanelType};
use crate::metraje::soffit_metraje;
use crate::units::Meters;

use super::{parse_label, positive};

/// How the soffit's furring runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    pub fn display_name(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "Horizontal",
            Orientation::Vertical => "Vertical",
        }
    }

    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let key = normalize_label(s);
        Orientation::ALL
            .into_iter()
            .find(|o| key == normalize_label(o.display_name()))
            .ok_or_else(|| CalcError::unknown_option("orientation", s))
    }
}

/// What the soffit's edge trim is fastened into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorWall {
    /// Concrete or block; shot with cap nails ("Mampostería")
    Masonry,
    /// An existing drywall partition; screwed ("Muro Tablayeso")
    Drywall,
}

impl AnchorWall {
    pub const ALL: [AnchorWall; 2] = [AnchorWall::Masonry, AnchorWall::Drywall];

    pub fn display_name(&self) -> &'static str {
        match self {
            AnchorWall::Masonry => "Masonry",
            AnchorWall::Drywall => "Drywall",
        }
    }

    pub fn trade_label(&self) -> &'static str {
        match self {
            AnchorWall::Masonry => "Mampostería",
            AnchorWall::Drywall => "Muro Tablayeso",
        }
    }

    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let key = normalize_label(s);
        AnchorWall::ALL
            .into_iter()
            .find(|a| key == normalize_label(a.display_name()) || key == normalize_label(a.trade_label()))
            .ok_or_else(|| CalcError::unknown_option("anchor wall", s))
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::fmt::Display for AnchorWall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Raw soffit fields as entered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoffitInput {
    pub orientation: Option<String>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub faces: Option<i64>,
    pub panel_type: Option<String>,
    pub anchor_wall: Option<String>,
}

/// A soffit that passed validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoffitItem {
    pub orientation: Orientation,
    pub length: Meters,
    pub width: Meters,
    pub height: Meters,
    pub faces: u32,
    pub panel_type: PanelType,
    pub anchor_wall: AnchorWall,
    pub metraje_linear: Meters,
}

impl SoffitInput {
    pub fn validate(&self) -> Result<SoffitItem, Vec<CalcError>> {
        let mut errors = Vec::new();

        let orientation = parse_label(&self.orientation, "orientation", Orientation::from_str_flexible)
            .map_err(|e| errors.push(e))
            .ok();
        let panel_type = parse_label(&self.panel_type, "panel type", PanelType::from_str_flexible)
            .map_err(|e| errors.push(e))
            .ok();
        let anchor_wall = parse_label(&self.anchor_wall, "anchor wall", AnchorWall::from_str_flexible)
            .map_err(|e| errors.push(e))
            .ok();
        let length = positive(self.length, "length").map_err(|e| errors.push(e)).ok();
        let width = positive(self.width, "width").map_err(|e| errors.push(e)).ok();
        let height = positive(self.height, "height").map_err(|e| errors.push(e)).ok();
        let faces = match self.faces {
            Some(f) if f > 0 => u32::try_from(f)
                .map_err(|_| errors.push(CalcError::invalid_input("faces", f.to_string(), "too large")))
                .ok(),
            Some(f) => {
                errors.push(CalcError::invalid_input("faces", f.to_string(), "must be > 0"));
                None
            }
            None => {
                errors.push(CalcError::missing_field("faces"));
                None
            }
        };

        match (orientation, panel_type, anchor_wall, length, width, height, faces) {
            (Some(orientation), Some(panel_type), Some(anchor_wall), Some(length), Some(width), Some(height), Some(faces))
                if errors.is_empty() =>
            {
                Ok(SoffitItem {
                    orientation,
                    length: Meters(length),
                    width: Meters(width),
                    height: Meters(height),
                    faces,
                    panel_type,
                    anchor_wall,
                    metraje_linear: soffit_metraje(self.length, self.faces),
                })
            }
            _ => Err(errors),
        }
    }
}
