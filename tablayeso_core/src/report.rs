//! # Estimate Report
//!
//! Runs a whole project through validation, per-item calculation, panel
//! accumulation and adjustment, and packages the result.
//!
//! The outcome is all-or-nothing: if any item fails validation or its
//! calculation, no bill of materials is produced and every collected message
//! is returned instead. Items are still processed after a failure so the user
//! sees every problem at once.
//!
//! ## JSON Serialization
//!
//! ```json
//! { "status": "Failure", "errors": ["Error in Wall #2: ..."] }
//! { "status": "Success", "work_area": "...", "calculated_at": "...",
//!   "items": [...], "totals": {...}, "materials": [...] }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::accumulator::PanelAccumulator;
use crate::calculations::{self, ItemMaterialSummary};
use crate::errors::CalcError;
use crate::items::{self, ItemDetail, ItemInput, StructureKind};
use crate::materials::{BillOfMaterials, MaterialQuantities};
use crate::metraje::Metraje;
use crate::pipeline::{self, LooseUnits, Packaging};
use crate::project::EstimatorSettings;

/// Billing totals across the project
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectTotals {
    /// Wall metraje
    pub wall_area_m2: f64,
    /// Ceiling metraje
    pub ceiling_area_m2: f64,
    /// Soffit metraje
    pub soffit_linear_m: f64,
}

impl ProjectTotals {
    fn add(&mut self, kind: StructureKind, metraje: Metraje) {
        match kind {
            StructureKind::Wall => self.wall_area_m2 += metraje.value,
            StructureKind::Ceiling => self.ceiling_area_m2 += metraje.value,
            StructureKind::Soffit => self.soffit_linear_m += metraje.value,
        }
    }
}

/// Per-item line of a successful report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemReport {
    pub id: Uuid,
    pub number: u32,
    pub kind: StructureKind,
    pub metraje: Metraje,
    /// Normalized inputs and the per-segment breakdown
    pub detail: ItemDetail,
    pub materials: ItemMaterialSummary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ItemReport {
    pub fn label(&self) -> String {
        format!("{} #{}", self.kind, self.number)
    }
}

/// A successful estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateReport {
    pub work_area: String,
    pub calculated_at: DateTime<Utc>,
    pub items: Vec<ItemReport>,
    pub totals: ProjectTotals,
    pub materials: BillOfMaterials,
}

/// Result of calculating a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum CalculationOutcome {
    /// At least one item was rejected; nothing was estimated
    Failure { errors: Vec<String> },
    Success(EstimateReport),
}

impl CalculationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CalculationOutcome::Success(_))
    }

    pub fn report(&self) -> Option<&EstimateReport> {
        match self {
            CalculationOutcome::Success(report) => Some(report),
            CalculationOutcome::Failure { .. } => None,
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            CalculationOutcome::Failure { errors } => errors,
            CalculationOutcome::Success(_) => &[],
        }
    }
}

/// One item as handed to the estimator
#[derive(Debug, Clone, Copy)]
pub struct ItemRef<'a> {
    pub id: Uuid,
    pub number: u32,
    pub input: &'a ItemInput,
}

/// Estimate a set of items with loose-unit packaging.
pub fn calculate_items<'a>(
    work_area: &str,
    items: impl IntoIterator<Item = ItemRef<'a>>,
    settings: &EstimatorSettings,
) -> CalculationOutcome {
    calculate_items_with_packaging(work_area, items, settings, &LooseUnits)
}

/// Estimate a set of items, ordering through `packaging`.
pub fn calculate_items_with_packaging<'a>(
    work_area: &str,
    items: impl IntoIterator<Item = ItemRef<'a>>,
    settings: &EstimatorSettings,
    packaging: &dyn Packaging,
) -> CalculationOutcome {
    let items: Vec<ItemRef<'a>> = items.into_iter().collect();
    if items.is_empty() {
        info!("nothing to calculate");
        return CalculationOutcome::Failure {
            errors: vec![CalcError::EmptyProject.to_string()],
        };
    }

    let mut errors = Vec::new();
    let mut reports = Vec::with_capacity(items.len());
    let mut item_quantities: Vec<MaterialQuantities> = Vec::with_capacity(items.len());
    let mut accumulator = PanelAccumulator::new();
    let mut totals = ProjectTotals::default();

    for item in &items {
        let kind = item.input.kind();
        let validated = match items::validate(item.id, item.number, item.input) {
            Ok(validated) => validated,
            Err(problems) => {
                let messages: Vec<String> = problems.iter().map(ToString::to_string).collect();
                warn!(kind = %kind, number = item.number, problems = problems.len(), "item rejected");
                errors.push(format!(
                    "Error in {} #{}: {}. Check the item's inputs.",
                    kind,
                    item.number,
                    messages.join(", ")
                ));
                continue;
            }
        };

        for warning in validated.warnings() {
            warn!(item = %validated.label(), "{}", warning);
        }

        let materials = match calculations::calculate(&validated, settings) {
            Ok(materials) => materials,
            Err(e) => {
                warn!(item = %validated.label(), error = %e, "item calculation failed");
                errors.push(format!("Unexpected error processing {} #{}: {}", kind, item.number, e));
                continue;
            }
        };

        accumulator.extend(&materials.panel_contributions);
        totals.add(kind, validated.metraje());
        reports.push(ItemReport {
            id: validated.id,
            number: validated.number,
            kind,
            metraje: validated.metraje(),
            warnings: validated.warnings().to_vec(),
            materials: materials.summary(),
            detail: validated.detail,
        });
        item_quantities.push(materials.quantities);
    }

    if !errors.is_empty() {
        info!(items = items.len(), rejected = errors.len(), "calculation failed");
        return CalculationOutcome::Failure { errors };
    }

    let project_totals = pipeline::aggregate(&item_quantities);
    let panels = accumulator.finalize();
    let materials = pipeline::adjust(&project_totals, &panels, settings.waste_percent, packaging);

    info!(items = items.len(), lines = materials.len(), "calculation succeeded");
    CalculationOutcome::Success(EstimateReport {
        work_area: work_area.to_string(),
        calculated_at: Utc::now(),
        items: reports,
        totals,
        materials,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{CeilingInput, SegmentInput, SoffitInput, WallInput};
    use crate::materials::{Material, PanelType, StudType};
    use pretty_assertions::assert_eq;

    fn standard_wall(width: f64, height: f64) -> ItemInput {
        ItemInput::Wall(WallInput {
            faces: Some(1),
            face1_panel: Some("Normal".to_string()),
            face2_panel: None,
            stud_spacing: Some(0.40),
            stud_type: Some("8ft-cal26".to_string()),
            double_structure: false,
            segments: vec![SegmentInput::new(width, height)],
        })
    }

    fn refs(inputs: &[ItemInput]) -> Vec<ItemRef<'_>> {
        inputs
            .iter()
            .enumerate()
            .map(|(i, input)| ItemRef {
                id: Uuid::new_v4(),
                number: i as u32 + 1,
                input,
            })
            .collect()
    }

    #[test]
    fn test_single_wall_end_to_end() {
        let inputs = vec![standard_wall(3.0, 2.4)];
        let settings = EstimatorSettings::default();
        let outcome = calculate_items("Lobby", refs(&inputs), &settings);
        let report = outcome.report().unwrap();

        let bill = &report.materials;
        // 8 studs -> 9
        assert_eq!(bill.quantity(Material::Stud(StudType::Ft8Cal26)), Some(9));
        // 1.967 -> 2 -> 2.1 -> 3
        assert_eq!(bill.quantity(Material::TrackChannel), Some(3));
        // 15.74 -> 16 -> 16.8 -> 17, firing caps follow
        assert_eq!(bill.quantity(Material::CapNails), Some(17));
        assert_eq!(bill.quantity(Material::FiringCaps), Some(17));
        // 96.6 -> 97 -> 101.85 -> 102
        assert_eq!(bill.quantity(Material::SCREW_1IN_FINE), Some(102));
        assert_eq!(bill.quantity(Material::SCREW_HALF_FINE), Some(34));
        // 7.2 / 2.98 = 2.42 -> 3 -> 3.15 -> 4
        assert_eq!(bill.quantity(Material::Panel(PanelType::Standard)), Some(4));
        assert_eq!(bill.quantity(Material::SCREW_HALF_DRILL), None);
        // finishing goods are opt-in
        assert_eq!(bill.quantity(Material::Basecoat), None);
        assert_eq!(bill.quantity(Material::JointCompound), None);
        assert!(bill.lines.iter().all(|l| l.quantity > 0));

        assert_eq!(report.work_area, "Lobby");
        assert!((report.totals.wall_area_m2 - 7.2).abs() < 1e-9);
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].label(), "Wall #1");
    }

    #[test]
    fn test_empty_project_is_advisory_failure() {
        let outcome = calculate_items("", Vec::new(), &EstimatorSettings::default());
        assert_eq!(
            outcome,
            CalculationOutcome::Failure {
                errors: vec!["No items to calculate. Add at least one wall, ceiling or soffit.".to_string()]
            }
        );
    }

    #[test]
    fn test_one_bad_item_fails_everything() {
        let bad = ItemInput::Soffit(SoffitInput {
            orientation: Some("Horizontal".to_string()),
            length: Some(0.0),
            width: Some(0.4),
            height: Some(0.3),
            faces: Some(1),
            panel_type: Some("Normal".to_string()),
            anchor_wall: None,
        });
        let inputs = vec![standard_wall(3.0, 2.4), bad];
        let outcome = calculate_items("", refs(&inputs), &EstimatorSettings::default());
        assert!(!outcome.is_success());
        assert_eq!(
            outcome.errors(),
            &[
                "Error in Soffit #2: Missing required field: anchor wall, Invalid length (0): must be > 0. \
                 Check the item's inputs."
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_every_rejected_item_is_reported() {
        let inputs = vec![
            standard_wall(0.0, 2.4),
            standard_wall(3.0, 2.4),
            ItemInput::Ceiling(CeilingInput::default()),
        ];
        let outcome = calculate_items("", refs(&inputs), &EstimatorSettings::default());
        let errors = outcome.errors();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("Error in Wall #1:"));
        assert!(errors[1].starts_with("Error in Ceiling #3:"));
    }

    #[test]
    fn test_small_wall_strips_pool_across_items() {
        // each strip is 1 m2 = 0.34 panel; three pool into one rounded-up count
        let inputs = vec![standard_wall(0.5, 2.0), standard_wall(0.5, 2.0), standard_wall(0.5, 2.0)];
        let outcome = calculate_items("", refs(&inputs), &EstimatorSettings::default());
        let bill = &outcome.report().unwrap().materials;
        // ceil(1.007) = 2 -> 2.1 -> 3
        assert_eq!(bill.quantity(Material::Panel(PanelType::Standard)), Some(3));
        // billed at 1 m x 2 m each
        assert!((outcome.report().unwrap().totals.wall_area_m2 - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_ceiling_warning_carried_to_report() {
        let inputs = vec![ItemInput::Ceiling(CeilingInput {
            panel_type: Some("Normal".to_string()),
            plenum: Some(0.5),
            trim_deduction: Some(0.0),
            panel_waste_percent: Some(5.0),
            segments: vec![SegmentInput::new(3.0, 4.0), SegmentInput::new(0.0, 1.0)],
        })];
        let outcome = calculate_items("", refs(&inputs), &EstimatorSettings::default());
        let report = outcome.report().unwrap();
        assert_eq!(report.items[0].warnings.len(), 1);
        assert!(report.materials.quantity(Material::HangerLegs).is_some());
        assert!((report.totals.ceiling_area_m2 - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_finishing_goods_when_enabled() {
        let inputs = vec![standard_wall(3.0, 2.4)];
        let settings = EstimatorSettings {
            include_finishing: true,
            ..EstimatorSettings::default()
        };
        let outcome = calculate_items("", refs(&inputs), &settings);
        let bill = &outcome.report().unwrap().materials;
        // 7.2 / 22 = 0.33 -> 1 -> 1.05 -> 2
        assert_eq!(bill.quantity(Material::JointCompound), Some(2));
        assert!(bill.quantity(Material::PaperTape).is_some());
        assert_eq!(bill.quantity(Material::Basecoat), None);
    }

    #[test]
    fn test_item_report_repeats_inputs_and_segments() {
        let inputs = vec![ItemInput::Ceiling(CeilingInput {
            panel_type: Some("resistente a la humedad".to_string()),
            plenum: Some(0.5),
            trim_deduction: Some(1.0),
            panel_waste_percent: Some(10.0),
            segments: vec![SegmentInput::new(3.0, 4.0), SegmentInput::new(0.5, 0.8)],
        })];
        let outcome = calculate_items("", refs(&inputs), &EstimatorSettings::default());
        let item = &outcome.report().unwrap().items[0];

        let ItemDetail::Ceiling(ceiling) = &item.detail else {
            panic!("expected a ceiling");
        };
        assert_eq!(ceiling.panel_type, PanelType::MoistureResistant);
        assert_eq!(item.detail.segments().len(), 2);
        assert_eq!(item.detail.segments()[1].number, 2);
        assert!((item.detail.segments()[1].area.0 - 0.4).abs() < 1e-12);
        assert!((item.detail.segments()[1].metraje_area.0 - 1.0).abs() < 1e-12);

        let json = serde_json::to_value(&outcome).unwrap();
        let detail = &json["items"][0]["detail"];
        assert_eq!(detail["kind"], "Ceiling");
        assert_eq!(detail["panel_type"], "MoistureResistant");
        assert_eq!(detail["plenum"], 0.5);
        assert_eq!(detail["trim_deduction"], 1.0);
        assert_eq!(detail["segments"].as_array().unwrap().len(), 2);
        assert_eq!(detail["segments"][0]["width"], 3.0);
        assert_eq!(detail["segments"][0]["length"], 4.0);
        assert_eq!(detail["segments"][0]["valid_for_materials"], true);
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = CalculationOutcome::Failure {
            errors: vec!["x".to_string()],
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"status":"Failure","errors":["x"]}"#);
    }
}
