//! # Structural Items
//!
//! The three kinds of work the estimator quotes, in two forms:
//!
//! - **Inputs** ([`ItemInput`]): raw, already type-coerced values straight
//!   from a form or a project file. Every field is optional; nothing is
//!   trusted.
//! - **Validated items** ([`ValidatedItem`]): the same item after every rule
//!   has been checked, with derived segment areas, aggregates and metraje.
//!
//! Validation never stops at the first problem: it returns either a
//! validated item or the complete, ordered list of what is wrong.
//!
//! ## JSON Serialization
//!
//! ```json
//! {
//!   "kind": "Wall",
//!   "faces": 1,
//!   "face1_panel": "Normal",
//!   "stud_spacing": 0.40,
//!   "stud_type": "8ft-cal26",
//!   "double_structure": false,
//!   "segments": [{ "width": 3.0, "height": 2.4 }]
//! }
//! ```

pub mod ceiling;
pub mod segment;
pub mod soffit;
pub mod wall;

pub use ceiling::{CeilingInput, CeilingItem};
pub use segment::{Segment, SegmentInput};
pub use soffit::{AnchorWall, Orientation, SoffitInput, SoffitItem};
pub use wall::{WallInput, WallItem};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CalcError, CalcResult};
use crate::materials::{PanelType, StudType};
use crate::metraje::{Metraje, MetrajeUnit};

/// Kind of structural item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    Wall,
    Ceiling,
    Soffit,
}

impl StructureKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            StructureKind::Wall => "Wall",
            StructureKind::Ceiling => "Ceiling",
            StructureKind::Soffit => "Soffit",
        }
    }

    /// Whether items of this kind are measured in segments
    pub fn has_segments(&self) -> bool {
        !matches!(self, StructureKind::Soffit)
    }
}

impl std::fmt::Display for StructureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Raw item input, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ItemInput {
    Wall(WallInput),
    Ceiling(CeilingInput),
    Soffit(SoffitInput),
}

impl ItemInput {
    pub fn kind(&self) -> StructureKind {
        match self {
            ItemInput::Wall(_) => StructureKind::Wall,
            ItemInput::Ceiling(_) => StructureKind::Ceiling,
            ItemInput::Soffit(_) => StructureKind::Soffit,
        }
    }

    /// Measurement segments, if this kind has any
    pub fn segments(&self) -> Option<&Vec<SegmentInput>> {
        match self {
            ItemInput::Wall(w) => Some(&w.segments),
            ItemInput::Ceiling(c) => Some(&c.segments),
            ItemInput::Soffit(_) => None,
        }
    }

    pub fn segments_mut(&mut self) -> Option<&mut Vec<SegmentInput>> {
        match self {
            ItemInput::Wall(w) => Some(&mut w.segments),
            ItemInput::Ceiling(c) => Some(&mut c.segments),
            ItemInput::Soffit(_) => None,
        }
    }

    /// A new item of `kind`, pre-filled with the usual starting values
    pub fn template(kind: StructureKind) -> Self {
        let standard = Some(PanelType::Standard.trade_label().to_string());
        match kind {
            StructureKind::Wall => ItemInput::Wall(WallInput {
                faces: Some(1),
                face1_panel: standard.clone(),
                face2_panel: standard,
                stud_spacing: Some(0.40),
                stud_type: Some(StudType::Ft8Cal26.code().to_string()),
                double_structure: false,
                segments: vec![SegmentInput::template(kind)],
            }),
            StructureKind::Ceiling => ItemInput::Ceiling(CeilingInput {
                panel_type: standard,
                plenum: Some(0.5),
                trim_deduction: Some(0.0),
                panel_waste_percent: Some(10.0),
                segments: vec![SegmentInput::template(kind)],
            }),
            StructureKind::Soffit => ItemInput::Soffit(SoffitInput {
                orientation: Some(Orientation::Horizontal.display_name().to_string()),
                length: Some(2.4),
                width: Some(0.30),
                height: Some(0.40),
                faces: Some(2),
                panel_type: standard,
                anchor_wall: Some(AnchorWall::Masonry.trade_label().to_string()),
            }),
        }
    }
}

/// Kind-specific part of a validated item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ItemDetail {
    Wall(WallItem),
    Ceiling(CeilingItem),
    Soffit(SoffitItem),
}

impl ItemDetail {
    /// Derived segments; empty for soffits
    pub fn segments(&self) -> &[Segment] {
        match self {
            ItemDetail::Wall(w) => &w.segments,
            ItemDetail::Ceiling(c) => &c.segments,
            ItemDetail::Soffit(_) => &[],
        }
    }
}

/// An item that passed validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedItem {
    pub id: Uuid,
    /// Display number ("Wall #3")
    pub number: u32,
    #[serde(flatten)]
    pub detail: ItemDetail,
}

impl ValidatedItem {
    pub fn kind(&self) -> StructureKind {
        match &self.detail {
            ItemDetail::Wall(_) => StructureKind::Wall,
            ItemDetail::Ceiling(_) => StructureKind::Ceiling,
            ItemDetail::Soffit(_) => StructureKind::Soffit,
        }
    }

    /// Human label, e.g. "Ceiling #2"
    pub fn label(&self) -> String {
        format!("{} #{}", self.kind(), self.number)
    }

    pub fn metraje(&self) -> Metraje {
        match &self.detail {
            ItemDetail::Wall(w) => Metraje {
                value: w.metraje_area.0,
                unit: MetrajeUnit::SquareMeters,
            },
            ItemDetail::Ceiling(c) => Metraje {
                value: c.metraje_area.0,
                unit: MetrajeUnit::SquareMeters,
            },
            ItemDetail::Soffit(s) => Metraje {
                value: s.metraje_linear.0,
                unit: MetrajeUnit::LinearMeters,
            },
        }
    }

    /// Non-blocking notes raised during validation
    pub fn warnings(&self) -> &[String] {
        match &self.detail {
            ItemDetail::Ceiling(c) => &c.warnings,
            _ => &[],
        }
    }
}

/// Validate one raw item, collecting every message.
pub fn validate(id: Uuid, number: u32, input: &ItemInput) -> Result<ValidatedItem, Vec<CalcError>> {
    let detail = match input {
        ItemInput::Wall(w) => ItemDetail::Wall(w.validate()?),
        ItemInput::Ceiling(c) => ItemDetail::Ceiling(c.validate()?),
        ItemInput::Soffit(s) => ItemDetail::Soffit(s.validate()?),
    };
    Ok(ValidatedItem { id, number, detail })
}

/// Parse a selection field with the given catalogue parser, reporting
/// unknown labels under `field`.
pub(crate) fn parse_label<T>(
    raw: &Option<String>,
    field: &str,
    parse: impl Fn(&str) -> CalcResult<T>,
) -> CalcResult<T> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Err(CalcError::missing_field(field)),
        Some(label) => parse(label).map_err(|_| CalcError::unknown_option(field, label)),
    }
}

/// A number that must be present and > 0.
pub(crate) fn positive(raw: Option<f64>, field: &str) -> CalcResult<f64> {
    match raw {
        Some(v) if v > 0.0 => Ok(v),
        Some(v) => Err(CalcError::invalid_input(field, v.to_string(), "must be > 0")),
        None => Err(CalcError::missing_field(field)),
    }
}

/// A number that must be present and >= 0.
pub(crate) fn non_negative(raw: Option<f64>, field: &str) -> CalcResult<f64> {
    match raw {
        Some(v) if v >= 0.0 => Ok(v),
        Some(v) => Err(CalcError::invalid_input(field, v.to_string(), "must be >= 0")),
        None => Err(CalcError::missing_field(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_input_tagged_by_kind() {
        let json = r#"{
            "kind": "Wall",
            "faces": 1,
            "face1_panel": "Normal",
            "stud_spacing": 0.4,
            "stud_type": "8ft-cal26",
            "segments": [{ "width": 3.0, "height": 2.4 }]
        }"#;
        let input: ItemInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.kind(), StructureKind::Wall);
        let ItemInput::Wall(wall) = &input else {
            panic!("expected a wall");
        };
        assert!(!wall.double_structure);
        assert_eq!(wall.segments, vec![SegmentInput::new(3.0, 2.4)]);
    }

    #[test]
    fn test_validate_keeps_identity() {
        let id = Uuid::new_v4();
        let input = ItemInput::Soffit(SoffitInput {
            orientation: Some("Vertical".to_string()),
            length: Some(2.0),
            width: Some(0.3),
            height: Some(0.5),
            faces: Some(1),
            panel_type: Some("Exterior".to_string()),
            anchor_wall: Some("Muro Tablayeso".to_string()),
        });
        let item = validate(id, 4, &input).unwrap();
        assert_eq!(item.id, id);
        assert_eq!(item.label(), "Soffit #4");
        assert_eq!(item.metraje().unit, MetrajeUnit::LinearMeters);
        assert!(item.warnings().is_empty());
    }

    #[test]
    fn test_validated_item_serialization() {
        let input = ItemInput::Ceiling(CeilingInput {
            panel_type: Some("Normal".to_string()),
            plenum: Some(0.3),
            trim_deduction: Some(0.0),
            panel_waste_percent: Some(5.0),
            segments: vec![SegmentInput::new(2.0, 2.0)],
        });
        let item = validate(Uuid::new_v4(), 1, &input).unwrap();
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"kind\":\"Ceiling\""));
        let roundtrip: ValidatedItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, roundtrip);
    }

    #[test]
    fn test_templates_are_valid() {
        for kind in [StructureKind::Wall, StructureKind::Ceiling, StructureKind::Soffit] {
            let input = ItemInput::template(kind);
            assert_eq!(input.kind(), kind);
            assert_eq!(input.segments().is_some(), kind.has_segments());
            assert!(validate(Uuid::new_v4(), 1, &input).is_ok(), "{} template rejected", kind);
        }
    }

    #[test]
    fn test_blank_label_is_missing() {
        let err = parse_label(&Some("  ".to_string()), "panel type", crate::materials::PanelType::from_str_flexible)
            .unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_number_guards() {
        assert!(positive(Some(0.0), "x").is_err());
        assert!(positive(Some(f64::NAN), "x").is_err());
        assert!(non_negative(Some(0.0), "x").is_ok());
        assert!(non_negative(Some(-0.01), "x").is_err());
    }
}
