//! Behavior shared by every record kind a registry can hold

use super::lesson::Lesson;
use super::question::Question;
use super::types::{BlueprintArea, Course, ExamSection};
use crate::validation::{self, ValidationResult, ValidationRules};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// An immutable, identified, classified content record
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned {
    /// Human-readable kind, used in logs and messages
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn course(&self) -> Course;
    fn section(&self) -> ExamSection;
    fn blueprint_area(&self) -> BlueprintArea;
    fn difficulty_label(&self) -> &'static str;

    /// One-line label for listings: a lesson's title, a question's prompt
    fn headline(&self) -> &str;

    /// Case-insensitive match; `query_lower` is already lowercased
    fn matches_query(&self, query_lower: &str) -> bool;

    /// Rank that must be unique within (course, section), if the kind has one
    fn sequence_order(&self) -> Option<u32> {
        None
    }

    fn validate(&self, rules: &ValidationRules) -> ValidationResult;
}

impl Record for Question {
    const KIND: &'static str = "question";

    fn id(&self) -> &str {
        &self.id
    }

    fn course(&self) -> Course {
        self.course
    }

    fn section(&self) -> ExamSection {
        self.section
    }

    fn blueprint_area(&self) -> BlueprintArea {
        self.blueprint_area
    }

    fn difficulty_label(&self) -> &'static str {
        self.difficulty.as_str()
    }

    fn headline(&self) -> &str {
        &self.prompt
    }

    fn matches_query(&self, query_lower: &str) -> bool {
        self.id.to_lowercase().contains(query_lower)
            || self.prompt.to_lowercase().contains(query_lower)
            || self.topic.to_lowercase().contains(query_lower)
            || self
                .subtopic
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(query_lower))
    }

    fn validate(&self, rules: &ValidationRules) -> ValidationResult {
        validation::validate_question(self, rules)
    }
}

impl Record for Lesson {
    const KIND: &'static str = "lesson";

    fn id(&self) -> &str {
        &self.id
    }

    fn course(&self) -> Course {
        self.course
    }

    fn section(&self) -> ExamSection {
        self.section
    }

    fn blueprint_area(&self) -> BlueprintArea {
        self.blueprint_area
    }

    fn difficulty_label(&self) -> &'static str {
        self.difficulty.as_str()
    }

    fn headline(&self) -> &str {
        &self.title
    }

    fn matches_query(&self, query_lower: &str) -> bool {
        self.id.to_lowercase().contains(query_lower)
            || self.title.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
            || self
                .topics
                .iter()
                .any(|t| t.to_lowercase().contains(query_lower))
    }

    fn sequence_order(&self) -> Option<u32> {
        Some(self.order)
    }

    fn validate(&self, rules: &ValidationRules) -> ValidationResult {
        validation::validate_lesson(self, rules)
    }
}
