//! `stats` command

#![cfg(feature = "native")]

use super::OutputFormat;
use colored::Colorize;
use exam_content::{BlueprintCoverage, ContentLibrary, ExamSection, RegistryStats};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub questions: RegistryStats,
    pub lessons: RegistryStats,
    /// Question coverage for every section with any content
    pub question_coverage: Vec<BlueprintCoverage>,
    pub lesson_coverage: Vec<BlueprintCoverage>,
}

impl StatsReport {
    pub fn compute(library: &ContentLibrary) -> Self {
        let questions = library.question_stats();
        let lessons = library.lesson_stats();

        let sections: Vec<ExamSection> = ExamSection::all()
            .iter()
            .copied()
            .filter(|s| questions.by_section.contains_key(s) || lessons.by_section.contains_key(s))
            .collect();

        Self {
            question_coverage: sections
                .iter()
                .map(|s| BlueprintCoverage::compute(&library.questions, *s))
                .collect(),
            lesson_coverage: sections
                .iter()
                .map(|s| BlueprintCoverage::compute(&library.lessons, *s))
                .collect(),
            questions,
            lessons,
        }
    }

    pub fn format_display(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", "Content Statistics".bright_cyan().bold()));
        out.push_str(&self.questions.format_display());
        out.push_str(&self.lessons.format_display());

        out.push_str(&format!("\n{}\n", "Question Coverage".bright_cyan().bold()));
        for coverage in &self.question_coverage {
            out.push_str(&coverage.format_display());
        }
        out.push_str(&format!("\n{}\n", "Lesson Coverage".bright_cyan().bold()));
        for coverage in &self.lesson_coverage {
            out.push_str(&coverage.format_display());
        }
        out
    }
}

pub fn cmd_stats(library: &ContentLibrary, format: OutputFormat) -> anyhow::Result<()> {
    let report = StatsReport::compute(library);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", report.format_display()),
    }
    Ok(())
}
