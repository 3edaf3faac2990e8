//! `validate` and `lint` commands

#![cfg(feature = "native")]

use super::RecordKind;
use colored::Colorize;
use exam_content::{
    load_collections, Collection, ContentConfig, ContentLibrary, Lesson, Question, Record,
    Registry, ValidationRules,
};
use std::path::Path;
use tracing::info;

// ============================================================================
// validate
// ============================================================================

/// Build the configured library; any construction error propagates
pub fn cmd_validate(config: &ContentConfig) -> anyhow::Result<()> {
    let library = ContentLibrary::from_config(config)?;
    println!("{}", summarize(&library));
    Ok(())
}

pub fn summarize(library: &ContentLibrary) -> String {
    format!(
        "{} {}\n{} {}\n",
        "✓".green(),
        registry_line(&library.questions),
        "✓".green(),
        registry_line(&library.lessons)
    )
}

fn registry_line<R: Record>(registry: &Registry<R>) -> String {
    format!(
        "{}s: {} records from {} collections",
        R::KIND,
        registry.len(),
        registry.collection_names().count()
    )
}

// ============================================================================
// lint
// ============================================================================

/// Outcome of linting one path
#[derive(Debug, Default)]
pub struct LintReport {
    pub records: usize,
    pub rejected: usize,
    /// Rendered per-record findings, only for records with violations
    pub findings: Vec<String>,
    /// Cross-record conflicts (duplicate ids, reused lesson orders)
    pub conflicts: Vec<String>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.rejected == 0 && self.conflicts.is_empty()
    }
}

pub fn cmd_lint(path: &Path, kind: RecordKind, rules: &ValidationRules) -> anyhow::Result<()> {
    let report = match kind {
        RecordKind::Questions => lint_collections(load_collections::<Question>(path)?, rules),
        RecordKind::Lessons => lint_collections(load_collections::<Lesson>(path)?, rules),
    };

    for finding in &report.findings {
        println!("{}", finding);
    }
    for conflict in &report.conflicts {
        println!("{} {}", "✗".red(), conflict);
    }

    info!(
        records = report.records,
        rejected = report.rejected,
        conflicts = report.conflicts.len(),
        "Lint completed for {}",
        path.display()
    );

    if report.is_clean() {
        println!(
            "{} {} record(s) in {} passed",
            "✓".green(),
            report.records,
            path.display()
        );
        Ok(())
    } else {
        anyhow::bail!(
            "{} of {} record(s) in {} rejected, {} conflict(s)",
            report.rejected,
            report.records,
            path.display(),
            report.conflicts.len()
        )
    }
}

/// Validate every record, then scan all records for id and order conflicts
pub fn lint_collections<R: Record>(
    collections: Vec<Collection<R>>,
    rules: &ValidationRules,
) -> LintReport {
    let mut report = LintReport::default();

    for collection in &collections {
        for record in collection.records() {
            report.records += 1;
            let result = record.validate(rules);
            if !result.is_acceptable(rules) {
                report.rejected += 1;
            }
            if !result.violations.is_empty() {
                let status = if result.is_acceptable(rules) {
                    "PASS".green()
                } else {
                    "FAIL".red()
                };
                report.findings.push(format!(
                    "{} {} ({})\n{}",
                    status,
                    record.id().bold(),
                    collection.name(),
                    result.format_display()
                ));
            }
        }
    }

    report.conflicts = Registry::conflicts(&collections)
        .iter()
        .map(ToString::to_string)
        .collect();
    report
}
