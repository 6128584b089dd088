//! # Project Data Structures
//!
//! The `Project` struct is the root container for an estimate: the work area
//! being quoted, the estimator settings, and the walls, ceilings and soffits
//! measured for it. Projects serialize to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, work area, timestamps)
//! ├── settings: EstimatorSettings (waste, finishing)
//! └── items: Vec<ProjectItem> (in entry order)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tablayeso_core::items::StructureKind;
//! use tablayeso_core::project::Project;
//!
//! let mut project = Project::new("Second floor offices");
//! project.add_template(StructureKind::Wall);
//! project.add_template(StructureKind::Ceiling);
//!
//! let outcome = project.calculate();
//! assert!(outcome.is_success());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_SOFFIT_PANEL_WASTE_PERCENT, DEFAULT_WASTE_PERCENT};
use crate::errors::{CalcError, CalcResult};
use crate::items::{ItemInput, SegmentInput, StructureKind};
use crate::metraje::{self, MetrajePreview};
use crate::pipeline::Packaging;
use crate::report::{self, CalculationOutcome, ItemRef};

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMetadata,

    #[serde(default)]
    pub settings: EstimatorSettings,

    /// Items in the order they were entered
    #[serde(default)]
    pub items: Vec<ProjectItem>,

    /// Last display number handed out; numbers are never reused
    #[serde(default)]
    pub item_counter: u32,
}

/// One measured item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub id: Uuid,
    /// Display number ("Wall #3")
    pub number: u32,
    #[serde(flatten)]
    pub input: ItemInput,
}

impl ProjectItem {
    pub fn kind(&self) -> StructureKind {
        self.input.kind()
    }

    pub fn label(&self) -> String {
        format!("{} #{}", self.kind(), self.number)
    }
}

impl Project {
    /// Create a new empty project for a work area.
    pub fn new(work_area: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                work_area: work_area.into(),
                created: now,
                modified: now,
            },
            settings: EstimatorSettings::default(),
            items: Vec::new(),
            item_counter: 0,
        }
    }

    /// Add an item.
    ///
    /// Walls and ceilings must come with at least one segment.
    pub fn add_item(&mut self, input: ItemInput) -> CalcResult<Uuid> {
        if input.segments().is_some_and(|s| s.is_empty()) {
            return Err(CalcError::invalid_operation(format!(
                "a {} needs at least one segment",
                input.kind()
            )));
        }
        self.item_counter += 1;
        let id = Uuid::new_v4();
        self.items.push(ProjectItem {
            id,
            number: self.item_counter,
            input,
        });
        self.touch();
        Ok(id)
    }

    /// Add a new item of `kind` with the usual starting values.
    pub fn add_template(&mut self, kind: StructureKind) -> Uuid {
        self.item_counter += 1;
        let id = Uuid::new_v4();
        self.items.push(ProjectItem {
            id,
            number: self.item_counter,
            input: ItemInput::template(kind),
        });
        self.touch();
        id
    }

    /// Remove an item by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<ProjectItem> {
        let index = self.items.iter().position(|item| item.id == *id)?;
        let item = self.items.remove(index);
        self.touch();
        Some(item)
    }

    pub fn get_item(&self, id: &Uuid) -> Option<&ProjectItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Mutable access marks the project as modified.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut ProjectItem> {
        let index = self.items.iter().position(|item| item.id == *id)?;
        self.touch();
        self.items.get_mut(index)
    }

    /// Switch an item to another kind, starting from that kind's template.
    ///
    /// The item keeps its id and display number.
    pub fn change_kind(&mut self, id: &Uuid, kind: StructureKind) -> CalcResult<()> {
        let item = self.item_mut_or_err(id)?;
        if item.kind() != kind {
            item.input = ItemInput::template(kind);
        }
        Ok(())
    }

    /// Append a segment to a wall or ceiling. Returns the new segment count.
    pub fn add_segment(&mut self, id: &Uuid, segment: SegmentInput) -> CalcResult<usize> {
        let item = self.item_mut_or_err(id)?;
        let kind = item.kind();
        let segments = item
            .input
            .segments_mut()
            .ok_or_else(|| CalcError::invalid_operation(format!("a {} has no segments", kind)))?;
        segments.push(segment);
        Ok(segments.len())
    }

    /// Remove the segment at `index` (0-based) from a wall or ceiling.
    ///
    /// The last remaining segment cannot be removed.
    pub fn remove_segment(&mut self, id: &Uuid, index: usize) -> CalcResult<SegmentInput> {
        let item = self.item_mut_or_err(id)?;
        let kind = item.kind();
        let segments = item
            .input
            .segments_mut()
            .ok_or_else(|| CalcError::invalid_operation(format!("a {} has no segments", kind)))?;
        if segments.len() <= 1 {
            return Err(CalcError::invalid_operation(format!(
                "a {} must keep at least one segment",
                kind
            )));
        }
        if index >= segments.len() {
            return Err(CalcError::invalid_operation(format!(
                "segment {} does not exist (the {} has {})",
                index + 1,
                kind,
                segments.len()
            )));
        }
        Ok(segments.remove(index))
    }

    /// Live billing quantity of one item, without validation.
    pub fn preview(&self, id: &Uuid) -> CalcResult<MetrajePreview> {
        self.get_item(id)
            .map(|item| metraje::preview(&item.input))
            .ok_or_else(|| CalcError::ItemNotFound { id: id.to_string() })
    }

    /// Estimate the whole project with loose-unit packaging.
    pub fn calculate(&self) -> CalculationOutcome {
        report::calculate_items(&self.meta.work_area, self.item_refs(), &self.settings)
    }

    /// Estimate the whole project, ordering through `packaging`.
    pub fn calculate_with_packaging(&self, packaging: &dyn Packaging) -> CalculationOutcome {
        report::calculate_items_with_packaging(&self.meta.work_area, self.item_refs(), &self.settings, packaging)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    fn item_refs(&self) -> impl Iterator<Item = ItemRef<'_>> {
        self.items.iter().map(|item| ItemRef {
            id: item.id,
            number: item.number,
            input: &item.input,
        })
    }

    fn item_mut_or_err(&mut self, id: &Uuid) -> CalcResult<&mut ProjectItem> {
        self.get_item_mut(id)
            .ok_or_else(|| CalcError::ItemNotFound { id: id.to_string() })
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Work area label printed on the estimate
    #[serde(default)]
    pub work_area: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}

/// Estimator settings.
///
/// Every field has a default, so a partial TOML or JSON table only
/// overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorSettings {
    /// Global waste (merma) applied to every material after rounding
    pub waste_percent: f64,

    /// Panel waste for soffits, which have no per-item waste input
    pub soffit_panel_waste_percent: f64,

    /// Add joint finishing goods (compound, tape, basecoat...) to the bill.
    /// Off by default, so the bill lists framing, fasteners and panels only.
    pub include_finishing: bool,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        EstimatorSettings {
            waste_percent: DEFAULT_WASTE_PERCENT,
            soffit_panel_waste_percent: DEFAULT_SOFFIT_PANEL_WASTE_PERCENT,
            include_finishing: false,
        }
    }
}
