//! Derived registry statistics
//!
//! Counts are computed once from a frozen registry. Coverage tables walk a
//! section's full blueprint so areas without content show up with a zero.

use indexmap::IndexMap;
use serde::Serialize;

use crate::blueprint;
use crate::registry::Registry;
use crate::schema::{BlueprintArea, ExamSection, Record};

/// Snapshot of a registry's composition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub kind: &'static str,
    pub total: usize,
    pub by_section: IndexMap<ExamSection, usize>,
    pub by_blueprint_area: IndexMap<BlueprintArea, usize>,
    pub by_difficulty: IndexMap<&'static str, usize>,
}

impl RegistryStats {
    pub fn compute<R: Record>(registry: &Registry<R>) -> Self {
        let mut by_difficulty = IndexMap::new();
        for record in registry.iter() {
            *by_difficulty.entry(record.difficulty_label()).or_insert(0) += 1;
        }

        Self {
            kind: R::KIND,
            total: registry.count(),
            by_section: registry.count_by_section(),
            by_blueprint_area: registry.count_by_blueprint_area(),
            by_difficulty,
        }
    }

    /// Sections present, with their share of the total
    pub fn section_shares(&self) -> Vec<(ExamSection, f64)> {
        if self.total == 0 {
            return Vec::new();
        }
        self.by_section
            .iter()
            .map(|(section, count)| (*section, *count as f64 / self.total as f64 * 100.0))
            .collect()
    }

    /// Format as display string
    pub fn format_display(&self) -> String {
        let mut output = format!("{} records: {}\n", self.kind, self.total);
        for (section, count) in &self.by_section {
            output.push_str(&format!(
                "  {:<9} {:>4}  {}\n",
                section.code(),
                count,
                section.display_name()
            ));
        }
        if !self.by_difficulty.is_empty() {
            let parts: Vec<_> = self
                .by_difficulty
                .iter()
                .map(|(label, count)| format!("{label} {count}"))
                .collect();
            output.push_str(&format!("  difficulty: {}\n", parts.join(", ")));
        }
        output
    }
}

/// One row of a coverage table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaCoverage {
    pub area: BlueprintArea,
    pub name: &'static str,
    /// Published weight, e.g. "35%" or "15-20%"
    pub weight: Option<String>,
    pub count: usize,
}

/// Record count for every known area of one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlueprintCoverage {
    pub section: ExamSection,
    pub areas: Vec<AreaCoverage>,
}

impl BlueprintCoverage {
    pub fn compute<R: Record>(registry: &Registry<R>, section: ExamSection) -> Self {
        let counts = registry.count_by_blueprint_area();
        let areas = blueprint::areas(section)
            .iter()
            .map(|spec| {
                let area = BlueprintArea::new(section, spec.number);
                AreaCoverage {
                    area,
                    name: spec.name,
                    weight: spec.weight.map(|w| w.to_string()),
                    count: counts.get(&area).copied().unwrap_or(0),
                }
            })
            .collect();
        Self { section, areas }
    }

    /// Areas with no records
    pub fn gaps(&self) -> Vec<BlueprintArea> {
        self.areas
            .iter()
            .filter(|row| row.count == 0)
            .map(|row| row.area)
            .collect()
    }

    pub fn covered(&self) -> usize {
        self.areas.iter().filter(|row| row.count > 0).count()
    }

    /// Format as display string
    pub fn format_display(&self) -> String {
        let mut output = format!(
            "{} {} ({}/{} areas covered)\n",
            self.section.code(),
            self.section.display_name(),
            self.covered(),
            self.areas.len()
        );
        for row in &self.areas {
            output.push_str(&format!(
                "  {:<7} {:>7} {:>4}  {}\n",
                row.area.to_string(),
                row.weight.as_deref().unwrap_or("-"),
                row.count,
                row.name
            ));
        }
        output
    }
}
