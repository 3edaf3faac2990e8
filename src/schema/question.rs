//! Multiple-choice question record

use super::types::{BlueprintArea, Course, ExamSection, QuestionDifficulty, SkillLevel};
use crate::errors::ContentError;
use serde::{Deserialize, Serialize};

/// One answer choice, identified by a short label (`A`, `B`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
}

impl AnswerOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A multiple-choice exam question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawQuestion")]
pub struct Question {
    /// Globally unique id (e.g. "CFP-RIS-002", "see1-001")
    pub id: String,
    #[serde(rename = "courseId")]
    pub course: Course,
    pub section: ExamSection,
    pub blueprint_area: BlueprintArea,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtopic: Option<String>,
    pub difficulty: QuestionDifficulty,
    pub skill_level: SkillLevel,
    /// Prompt shown to the learner
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<AnswerOption>,
    pub correct_option_id: String,
    /// Shown after answering
    pub explanation: String,
    /// Authority citation (IRC section, IRS publication)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Question {
    /// New question in `area`; course and section follow from the area
    pub fn new(id: impl Into<String>, area: BlueprintArea) -> Self {
        Self {
            id: id.into(),
            course: area.section.course(),
            section: area.section,
            blueprint_area: area,
            topic: String::new(),
            subtopic: None,
            difficulty: QuestionDifficulty::default(),
            skill_level: SkillLevel::default(),
            prompt: String::new(),
            options: Vec::new(),
            correct_option_id: String::new(),
            explanation: String::new(),
            reference: None,
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn with_subtopic(mut self, subtopic: impl Into<String>) -> Self {
        self.subtopic = Some(subtopic.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: QuestionDifficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_skill(mut self, skill: SkillLevel) -> Self {
        self.skill_level = skill;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set labelled options, e.g. `&[("A", "..."), ("B", "...")]`
    pub fn with_options(mut self, options: &[(&str, &str)]) -> Self {
        self.options = options
            .iter()
            .map(|(id, text)| AnswerOption::new(*id, *text))
            .collect();
        self
    }

    pub fn with_answer(mut self, option_id: impl Into<String>) -> Self {
        self.correct_option_id = option_id.into();
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// The option the answer key points at
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == self.correct_option_id)
    }

    /// Whether `option_id` is the keyed answer
    pub fn is_correct(&self, option_id: &str) -> bool {
        self.correct_option_id == option_id
    }
}

// ============================================================================
// Wire input
// ============================================================================

/// Options arrive either labelled or as bare strings keyed by position
#[derive(Deserialize)]
#[serde(untagged)]
enum RawOption {
    Labeled(AnswerOption),
    Plain(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    id: String,
    course_id: Course,
    section: ExamSection,
    blueprint_area: BlueprintArea,
    #[serde(default)]
    topic: String,
    #[serde(default)]
    subtopic: Option<String>,
    #[serde(default)]
    difficulty: QuestionDifficulty,
    #[serde(default)]
    skill_level: SkillLevel,
    question: String,
    options: Vec<RawOption>,
    #[serde(default)]
    correct_option_id: Option<String>,
    #[serde(default)]
    correct_answer: Option<usize>,
    #[serde(default)]
    explanation: String,
    #[serde(default)]
    reference: Option<String>,
}

/// Positional label: 0 -> "A", 1 -> "B", ...
pub(crate) fn option_label(index: usize) -> Option<String> {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i).to_string())
}

/// Drop an "A) " / "A. " prefix when it repeats the assigned label
fn strip_label_prefix<'a>(text: &'a str, label: &str) -> &'a str {
    text.strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(") ").or_else(|| rest.strip_prefix(". ")))
        .unwrap_or(text)
}

fn normalize_options(id: &str, raw: Vec<RawOption>) -> Result<Vec<AnswerOption>, ContentError> {
    let labeled = raw.iter().filter(|o| matches!(o, RawOption::Labeled(_))).count();
    if labeled != 0 && labeled != raw.len() {
        return Err(ContentError::invalid(
            "options",
            format!("{id}: mixes labelled and plain options"),
        ));
    }

    raw.into_iter()
        .enumerate()
        .map(|(i, option)| match option {
            RawOption::Labeled(option) => Ok(option),
            RawOption::Plain(text) => {
                let label = option_label(i).ok_or_else(|| {
                    ContentError::invalid("options", format!("{id}: more than 26 options"))
                })?;
                let text = strip_label_prefix(&text, &label).to_string();
                Ok(AnswerOption { id: label, text })
            }
        })
        .collect()
}

impl TryFrom<RawQuestion> for Question {
    type Error = ContentError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let options = normalize_options(&raw.id, raw.options)?;

        let correct_option_id = match (raw.correct_option_id, raw.correct_answer) {
            (Some(label), Some(index)) => {
                if options.get(index).map(|o| o.id.as_str()) != Some(label.as_str()) {
                    return Err(ContentError::invalid(
                        "answer key",
                        format!(
                            "{}: correctOptionId '{}' disagrees with correctAnswer {}",
                            raw.id, label, index
                        ),
                    ));
                }
                label
            }
            (Some(label), None) => label,
            (None, Some(index)) => options
                .get(index)
                .map(|o| o.id.clone())
                .ok_or_else(|| {
                    ContentError::invalid(
                        "answer key",
                        format!("{}: correctAnswer {} is out of range", raw.id, index),
                    )
                })?,
            (None, None) => {
                return Err(ContentError::invalid(
                    "answer key",
                    format!("{}: no correctOptionId or correctAnswer", raw.id),
                ))
            }
        };

        Ok(Self {
            id: raw.id,
            course: raw.course_id,
            section: raw.section,
            blueprint_area: raw.blueprint_area,
            topic: raw.topic,
            subtopic: raw.subtopic,
            difficulty: raw.difficulty,
            skill_level: raw.skill_level,
            prompt: raw.question,
            options,
            correct_option_id,
            explanation: raw.explanation,
            reference: raw.reference,
        })
    }
}
