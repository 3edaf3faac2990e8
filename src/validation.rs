//! Record validation
//!
//! Authoring-time checks for questions and lessons. Critical and Error
//! violations make a record unusable; Warning and Info flag it for revision.

use crate::schema::{Lesson, Question, SectionBlock};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Validation severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    /// Record is broken (unanswerable question, malformed table)
    Critical,
    /// Record is misfiled or inconsistent
    Error,
    /// Record is usable but should be revised
    Warning,
    /// Informational
    Info,
}

impl ValidationSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        }
    }

    fn penalty(&self) -> i32 {
        match self {
            Self::Critical => 50,
            Self::Error => 25,
            Self::Warning => 10,
            Self::Info => 2,
        }
    }

    fn is_blocking(&self) -> bool {
        matches!(self, Self::Critical | Self::Error)
    }
}

/// A single validation violation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationViolation {
    /// Rule that was violated
    pub constraint: String,
    pub severity: ValidationSeverity,
    /// Field or block path (e.g. "options", "content.sections[3]")
    pub location: String,
    /// The offending value
    pub text: String,
    /// Suggested fix
    pub suggestion: String,
}

impl ValidationViolation {
    pub(crate) fn new(
        constraint: &str,
        severity: ValidationSeverity,
        location: impl Into<String>,
        text: impl Into<String>,
        suggestion: &str,
    ) -> Self {
        Self {
            constraint: constraint.to_string(),
            severity,
            location: location.into(),
            text: text.into(),
            suggestion: suggestion.to_string(),
        }
    }
}

impl fmt::Display for ValidationViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} @ {}: {}",
            self.severity.label(),
            self.constraint,
            self.location,
            self.text
        )
    }
}

/// Outcome of validating one record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// No Critical or Error violations
    pub passed: bool,
    /// Quality score (0-100)
    pub score: u8,
    pub violations: Vec<ValidationViolation>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::pass()
    }
}

impl ValidationResult {
    pub fn pass() -> Self {
        Self {
            passed: true,
            score: 100,
            violations: Vec::new(),
        }
    }

    pub fn add_violation(&mut self, violation: ValidationViolation) {
        self.violations.push(violation);
        self.score = Self::calculate_score(&self.violations);
        self.passed = !self.violations.iter().any(|v| v.severity.is_blocking());
    }

    fn calculate_score(violations: &[ValidationViolation]) -> u8 {
        let score = violations
            .iter()
            .fold(100i32, |score, v| score - v.severity.penalty());
        score.clamp(0, 100) as u8
    }

    pub fn has_critical(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == ValidationSeverity::Critical)
    }

    pub fn has_warnings(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == ValidationSeverity::Warning)
    }

    /// Whether the record may enter a registry under `rules`
    pub fn is_acceptable(&self, rules: &ValidationRules) -> bool {
        self.passed && !(rules.fail_on_warnings && self.has_warnings())
    }

    /// Violations at or above `severity`, rendered one per line
    pub fn messages_at_least(&self, severity: ValidationSeverity) -> Vec<String> {
        self.violations
            .iter()
            .filter(|v| v.severity <= severity)
            .map(ToString::to_string)
            .collect()
    }

    /// Format as display string
    pub fn format_display(&self) -> String {
        let mut output = format!("Quality Score: {}/100\n", self.score);

        if self.violations.is_empty() {
            output.push_str("No violations found.\n");
            return output;
        }

        output.push_str(&format!("Violations ({}):\n", self.violations.len()));
        for (i, v) in self.violations.iter().enumerate() {
            let prefix = if i == self.violations.len() - 1 {
                "└──"
            } else {
                "├──"
            };
            output.push_str(&format!(
                "{} [{}] {} @ {}\n",
                prefix,
                v.severity.label(),
                v.constraint,
                v.location
            ));
            output.push_str(&format!("    Text: \"{}\"\n", v.text));
            output.push_str(&format!("    Fix: {}\n", v.suggestion));
        }
        output
    }
}

/// Tunable thresholds, read from the `[validation]` config table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Treat warnings as fatal at registry build time
    pub fail_on_warnings: bool,
    /// Explanations shorter than this draw a warning
    pub min_explanation_chars: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            fail_on_warnings: false,
            min_explanation_chars: 20,
        }
    }
}

fn excerpt(text: &str) -> String {
    let mut out: String = text.chars().take(60).collect();
    if text.chars().count() > 60 {
        out.push_str("...");
    }
    out
}

// ============================================================================
// Questions
// ============================================================================

/// Check a question's answer key, classification and text fields
pub fn validate_question(question: &Question, rules: &ValidationRules) -> ValidationResult {
    let mut result = ValidationResult::pass();
    use ValidationSeverity::*;

    if question.id.trim().is_empty() {
        result.add_violation(ValidationViolation::new(
            "id_present",
            Critical,
            "id",
            "",
            "Assign a domain-prefixed id such as see1-001",
        ));
    }
    if question.prompt.trim().is_empty() {
        result.add_violation(ValidationViolation::new(
            "prompt_present",
            Critical,
            "question",
            "",
            "Write the question prompt",
        ));
    }

    if question.options.is_empty() {
        result.add_violation(ValidationViolation::new(
            "options_present",
            Critical,
            "options",
            "",
            "Add the answer choices",
        ));
    } else if question.options.len() < 2 {
        result.add_violation(ValidationViolation::new(
            "options_min_two",
            Warning,
            "options",
            format!("{} option", question.options.len()),
            "Multiple-choice questions need at least two choices",
        ));
    }

    let mut seen = HashSet::new();
    for (i, option) in question.options.iter().enumerate() {
        if !seen.insert(option.id.as_str()) {
            result.add_violation(ValidationViolation::new(
                "option_labels_unique",
                Critical,
                format!("options[{i}]"),
                option.id.clone(),
                "Give every option a distinct label",
            ));
        }
        if option.text.trim().is_empty() {
            result.add_violation(ValidationViolation::new(
                "option_text_present",
                Warning,
                format!("options[{i}]"),
                option.id.clone(),
                "Write the option text",
            ));
        }
    }

    let matches = question
        .options
        .iter()
        .filter(|o| o.id == question.correct_option_id)
        .count();
    if matches != 1 {
        result.add_violation(ValidationViolation::new(
            "answer_key_resolves",
            Critical,
            "correctOptionId",
            question.correct_option_id.clone(),
            "Point correctOptionId at exactly one option label",
        ));
    }

    let explanation = question.explanation.trim();
    if explanation.is_empty() {
        result.add_violation(ValidationViolation::new(
            "explanation_present",
            Critical,
            "explanation",
            "",
            "Explain why the keyed answer is correct",
        ));
    } else if explanation.chars().count() < rules.min_explanation_chars {
        result.add_violation(ValidationViolation::new(
            "explanation_length",
            Warning,
            "explanation",
            excerpt(explanation),
            "Expand the explanation to cover why the distractors are wrong",
        ));
    }

    check_classification(
        &mut result,
        question.course,
        question.section,
        question.blueprint_area,
    );

    if question.reference.is_none() {
        result.add_violation(ValidationViolation::new(
            "reference_present",
            Info,
            "reference",
            "",
            "Cite the IRC section or IRS publication",
        ));
    }

    result
}

fn check_classification(
    result: &mut ValidationResult,
    course: crate::schema::Course,
    section: crate::schema::ExamSection,
    area: crate::schema::BlueprintArea,
) {
    if section.course() != course {
        result.add_violation(ValidationViolation::new(
            "section_in_course",
            ValidationSeverity::Error,
            "section",
            format!("{section} under {course}"),
            "Use a section that belongs to the record's course",
        ));
    }
    if area.section != section {
        result.add_violation(ValidationViolation::new(
            "area_in_section",
            ValidationSeverity::Error,
            "blueprintArea",
            format!("{area} under {section}"),
            "Use a blueprint area from the record's section",
        ));
    }
    if !area.is_known() {
        result.add_violation(ValidationViolation::new(
            "area_known",
            ValidationSeverity::Error,
            "blueprintArea",
            area.to_string(),
            "Use an area listed in the section's blueprint table",
        ));
    }
}

// ============================================================================
// Lessons
// ============================================================================

/// Check a lesson's metadata and every content block
pub fn validate_lesson(lesson: &Lesson, _rules: &ValidationRules) -> ValidationResult {
    let mut result = ValidationResult::pass();
    use ValidationSeverity::*;

    if lesson.id.trim().is_empty() {
        result.add_violation(ValidationViolation::new(
            "id_present",
            Critical,
            "id",
            "",
            "Assign an id such as SEE1-001",
        ));
    }
    if lesson.title.trim().is_empty() {
        result.add_violation(ValidationViolation::new(
            "title_present",
            Critical,
            "title",
            "",
            "Give the lesson a title",
        ));
    }
    if lesson.order == 0 {
        result.add_violation(ValidationViolation::new(
            "order_positive",
            Critical,
            "order",
            "0",
            "Orders start at 1",
        ));
    }
    if lesson.duration == 0 {
        result.add_violation(ValidationViolation::new(
            "duration_present",
            Warning,
            "duration",
            "0",
            "Estimate the study time in minutes",
        ));
    }
    if lesson.topics.is_empty() {
        result.add_violation(ValidationViolation::new(
            "topics_present",
            Warning,
            "topics",
            "",
            "Tag the lesson with its topics",
        ));
    }

    check_classification(&mut result, lesson.course, lesson.section, lesson.blueprint_area);

    let blocks = lesson.blocks();
    if blocks.is_empty() {
        result.add_violation(ValidationViolation::new(
            "content_present",
            Error,
            "content.sections",
            "",
            "Add at least one content block",
        ));
        return result;
    }

    for (i, block) in blocks.iter().enumerate() {
        let location = format!("content.sections[{i}]");
        match block {
            SectionBlock::Table { headers, rows, .. } => {
                if headers.is_empty() {
                    result.add_violation(ValidationViolation::new(
                        "table_headers_present",
                        Critical,
                        location.clone(),
                        block.title(),
                        "Give the table a header row",
                    ));
                }
                for (r, row) in rows.iter().enumerate() {
                    if row.len() != headers.len() {
                        result.add_violation(ValidationViolation::new(
                            "table_row_width",
                            Critical,
                            format!("{location}.rows[{r}]"),
                            format!("{} cells, {} headers", row.len(), headers.len()),
                            "Every row needs one cell per header",
                        ));
                    }
                }
            }
            _ => {
                if block.items().is_some_and(|items| items.is_empty()) {
                    result.add_violation(ValidationViolation::new(
                        "block_items_present",
                        Warning,
                        location,
                        block.title(),
                        "Remove the empty block or add its items",
                    ));
                }
            }
        }
    }

    if !blocks
        .iter()
        .any(|b| matches!(b, SectionBlock::Summary { .. }))
    {
        result.add_violation(ValidationViolation::new(
            "summary_present",
            Warning,
            "content.sections",
            lesson.title.clone(),
            "Close the lesson with a key-takeaways summary block",
        ));
    }

    result
}
