//! Content collections
//!
//! A collection is a named, ordered batch of records as authored: one per
//! question bank or lesson set. The built-in collections are hand-authored
//! literals; additional collections are loaded from JSON or YAML files.

mod cfp_lessons;
mod cfp_questions;
mod ea_lessons;
mod ea_questions;
mod loader;


pub use loader::{load_collection, load_collections};

use crate::schema::{Lesson, Question, Record};

/// A named, ordered batch of records
#[derive(Debug, Clone)]
pub struct Collection<R> {
    name: String,
    records: Vec<R>,
}

impl<R: Record> Collection<R> {
    pub fn new(name: impl Into<String>, records: Vec<R>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn into_parts(self) -> (String, Vec<R>) {
        (self.name, self.records)
    }
}

/// Built-in question banks, in syllabus order
pub fn builtin_questions() -> Vec<Collection<Question>> {
    vec![
        Collection::new("cfp-insurance", cfp_questions::insurance()),
        Collection::new("see1-questions", ea_questions::part1()),
        Collection::new("see2-questions", ea_questions::part2()),
        Collection::new("see3-questions", ea_questions::part3()),
    ]
}

/// Built-in lesson sets, in syllabus order
pub fn builtin_lessons() -> Vec<Collection<Lesson>> {
    vec![
        Collection::new("cfp-risk-lessons", cfp_lessons::risk_management()),
        Collection::new("see1-lessons", ea_lessons::part1()),
        Collection::new("see2-lessons", ea_lessons::part2()),
        Collection::new("see3-lessons", ea_lessons::part3()),
    ]
}
