//! Plain-text rendering of estimates and previews.
//!
//! Each view is a `Display` wrapper, printed with `print!("{}", ...)`.

use std::fmt;

use tablayeso_core::items::Segment;
use tablayeso_core::metraje;
use tablayeso_core::project::Project;
use tablayeso_core::report::{EstimateReport, ItemReport};

const RULE: &str = "═══════════════════════════════════════";

/// Full text report of a successful estimate
pub struct Estimate<'a>(pub &'a EstimateReport);

/// Messages of a rejected estimate
pub struct Failure<'a>(pub &'a [String]);

/// Per-item metraje of a project, without validation
pub struct Preview<'a>(pub &'a Project);

impl fmt::Display for Estimate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "{}", RULE)?;
        if report.work_area.is_empty() {
            writeln!(f, "  MATERIAL ESTIMATE")?;
        } else {
            writeln!(f, "  MATERIAL ESTIMATE: {}", report.work_area)?;
        }
        writeln!(f, "  {}", report.calculated_at.format("%Y-%m-%d %H:%M UTC"))?;
        writeln!(f, "{}", RULE)?;
        writeln!(f)?;

        writeln!(f, "Items:")?;
        for item in &report.items {
            write_item(f, item)?;
        }
        writeln!(f)?;

        let totals = &report.totals;
        writeln!(f, "Metraje:")?;
        writeln!(f, "  Walls:     {:>10.2} m²", totals.wall_area_m2)?;
        writeln!(f, "  Ceilings:  {:>10.2} m²", totals.ceiling_area_m2)?;
        writeln!(f, "  Soffits:   {:>10.2} m", totals.soffit_linear_m)?;
        writeln!(f)?;

        writeln!(f, "Materials:")?;
        let width = report
            .materials
            .lines
            .iter()
            .map(|line| line.name.chars().count())
            .max()
            .unwrap_or(0);
        for line in &report.materials.lines {
            writeln!(f, "  {:<width$}  {:>6} {}", line.name, line.quantity, line.unit, width = width)?;
        }
        writeln!(f, "{}", RULE)
    }
}

fn write_item(f: &mut fmt::Formatter<'_>, item: &ItemReport) -> fmt::Result {
    writeln!(f, "  {:<14} {:>10}", item.label(), item.metraje.to_string())?;
    for segment in item.detail.segments() {
        write_segment(f, segment)?;
    }
    for warning in &item.warnings {
        writeln!(f, "      ! {}", warning)?;
    }
    Ok(())
}

fn write_segment(f: &mut fmt::Formatter<'_>, segment: &Segment) -> fmt::Result {
    write!(
        f,
        "    segment {:<3} {:>6.2} x {:<6.2} area {:>7.2} m²  metraje {:>7.2} m²",
        segment.number, segment.width, segment.length, segment.area.0, segment.metraje_area.0
    )?;
    if !segment.valid_for_materials {
        write!(f, "  (ignored)")?;
    }
    writeln!(f)
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Calculation failed:")?;
        for error in self.0 {
            writeln!(f, "  - {}", error)?;
        }
        Ok(())
    }
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let project = self.0;
        if project.items.is_empty() {
            return writeln!(f, "No items.");
        }
        for item in &project.items {
            let preview = metraje::preview(&item.input);
            writeln!(f, "{:<14} {:>10}", item.label(), preview.total.to_string())?;
            for (i, value) in preview.segments.iter().enumerate() {
                writeln!(f, "  segment {:<3} {:>8.2} {}", i + 1, value, preview.total.unit.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tablayeso_core::items::{SegmentInput, StructureKind};

    #[test]
    fn test_estimate_lists_every_line() {
        let mut project = Project::new("Lobby");
        project.add_template(StructureKind::Wall);
        let outcome = project.calculate();
        let report = outcome.report().unwrap();
        let text = Estimate(report).to_string();
        assert!(text.contains("MATERIAL ESTIMATE: Lobby"));
        assert!(text.contains("Wall #1"));
        for line in &report.materials.lines {
            assert!(text.contains(&line.name));
        }
    }

    #[test]
    fn test_estimate_shows_segments() {
        let mut project = Project::new("");
        let id = project.add_template(StructureKind::Ceiling);
        project.add_segment(&id, SegmentInput::new(0.0, 2.0)).unwrap();
        let outcome = project.calculate();
        let text = Estimate(outcome.report().unwrap()).to_string();
        assert!(text.contains("segment 1     3.00 x 4.00   area   12.00 m²  metraje   12.00 m²"));
        assert!(text.contains("segment 2     0.00 x 2.00   area    0.00 m²  metraje    0.00 m²  (ignored)"));
        assert!(text.contains("! Segment 2:"));
    }

    #[test]
    fn test_failure_lists_errors() {
        let errors = ["Error in Wall #1: x".to_string(), "Error in Soffit #2: y".to_string()];
        assert_eq!(
            Failure(&errors).to_string(),
            "Calculation failed:\n  - Error in Wall #1: x\n  - Error in Soffit #2: y\n"
        );
    }

    #[test]
    fn test_preview_per_segment() {
        let mut project = Project::new("");
        project.add_template(StructureKind::Ceiling);
        project.add_template(StructureKind::Soffit);
        let text = Preview(&project).to_string();
        assert!(text.contains("Ceiling #1"));
        assert!(text.contains("12.00 m²"));
        assert!(text.contains("segment 1"));
        // 2.4 m x 2 faces
        assert!(text.contains("4.80 m"));
    }

    #[test]
    fn test_preview_of_empty_project() {
        assert_eq!(Preview(&Project::new("")).to_string(), "No items.\n");
    }
}
