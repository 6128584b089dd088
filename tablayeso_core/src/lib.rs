//! # tablayeso_core - Drywall Material Estimation Engine
//!
//! `tablayeso_core` turns measured walls, suspended ceilings and soffits into
//! a bill of purchasable materials for drywall and metal-framing work
//! ("tablayeso"): panels, studs, channels, trim, fasteners and finishing
//! goods, plus the billing quantities (metraje) the job is quoted on. All
//! inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from items to an outcome value
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, every problem reported at once
//! - **All-or-nothing**: One bad item means no bill, never a partial one
//!
//! ## Quick Start
//!
//! ```rust
//! use tablayeso_core::items::StructureKind;
//! use tablayeso_core::materials::{Material, PanelType};
//! use tablayeso_core::project::Project;
//!
//! let mut project = Project::new("Reception");
//! project.add_template(StructureKind::Wall);
//!
//! let outcome = project.calculate();
//! let report = outcome.report().expect("template wall is valid");
//! assert!(report.materials.quantity(Material::Panel(PanelType::Standard)).is_some());
//! ```
//!
//! ## Modules
//!
//! - [`project`] - Project container, metadata, and settings
//! - [`items`] - Wall, ceiling and soffit inputs and their validation
//! - [`metraje`] - Billing quantities and the live preview
//! - [`calculations`] - Per-item material take-off
//! - [`accumulator`] - Project-wide panel counting
//! - [`pipeline`] - Aggregation, rounding, waste and packaging
//! - [`report`] - The estimate outcome and the orchestrator that builds it
//! - [`materials`] - Material catalogue, panel and stud types
//! - [`constants`] - Yields, bar lengths and spacing standards
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod accumulator;
pub mod calculations;
pub mod constants;
pub mod errors;
pub mod items;
pub mod materials;
pub mod metraje;
pub mod pipeline;
pub mod project;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use items::{ItemInput, StructureKind};
pub use materials::{BillOfMaterials, Material};
pub use project::{EstimatorSettings, Project, ProjectItem, ProjectMetadata};
pub use report::{calculate_items, CalculationOutcome, EstimateReport};
