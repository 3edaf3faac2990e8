//! Registry lookups and filters
//!
//! All queries are stable filters over registry order and never mutate.

use indexmap::IndexMap;
use tracing::{debug, instrument};

use super::Registry;
use crate::schema::{
    BlueprintArea, Course, ExamSection, Lesson, LessonDifficulty, Question, QuestionDifficulty,
    Record,
};

impl<R: Record> Registry<R> {
    /// Exact id lookup; `None` when absent
    #[instrument(name = "registry.get", skip(self), fields(kind = R::KIND, found = tracing::field::Empty))]
    pub fn get(&self, id: &str) -> Option<&R> {
        let result = self.index.get(id).map(|&i| &self.records[i]);
        tracing::Span::current().record("found", result.is_some());
        result
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Name of the collection `id` was loaded from
    pub fn source_of(&self, id: &str) -> Option<&str> {
        self.index
            .get(id)
            .map(|&i| self.collections[self.origins[i]].as_str())
    }

    /// Records of one section, in registry order
    #[instrument(name = "registry.by_section", skip(self), fields(kind = R::KIND, result_count = tracing::field::Empty))]
    pub fn by_section(&self, section: ExamSection) -> Vec<&R> {
        let results: Vec<_> = self
            .records
            .iter()
            .filter(|r| r.section() == section)
            .collect();
        tracing::Span::current().record("result_count", results.len());
        debug!(section = %section, count = results.len(), "Section query completed");
        results
    }

    /// Records tagged with one blueprint area, in registry order
    #[instrument(name = "registry.by_blueprint_area", skip(self), fields(kind = R::KIND, result_count = tracing::field::Empty))]
    pub fn by_blueprint_area(&self, area: BlueprintArea) -> Vec<&R> {
        let results: Vec<_> = self
            .records
            .iter()
            .filter(|r| r.blueprint_area() == area)
            .collect();
        tracing::Span::current().record("result_count", results.len());
        debug!(area = %area, count = results.len(), "Blueprint area query completed");
        results
    }

    #[instrument(name = "registry.by_course", skip(self), fields(kind = R::KIND, result_count = tracing::field::Empty))]
    pub fn by_course(&self, course: Course) -> Vec<&R> {
        let results: Vec<_> = self
            .records
            .iter()
            .filter(|r| r.course() == course)
            .collect();
        tracing::Span::current().record("result_count", results.len());
        results
    }

    /// Case-insensitive substring search over id, title or prompt, and topics
    #[instrument(name = "registry.search", skip(self), fields(kind = R::KIND, result_count = tracing::field::Empty))]
    pub fn search(&self, query: &str) -> Vec<&R> {
        let query_lower = query.to_lowercase();
        let results: Vec<_> = self
            .records
            .iter()
            .filter(|r| r.matches_query(&query_lower))
            .collect();
        tracing::Span::current().record("result_count", results.len());
        debug!(query = query, count = results.len(), "Search completed");
        results
    }

    /// Ids in registry order
    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(Record::id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total record count
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Record count per section, in order of first appearance
    pub fn count_by_section(&self) -> IndexMap<ExamSection, usize> {
        let mut counts = IndexMap::new();
        for record in &self.records {
            *counts.entry(record.section()).or_insert(0) += 1;
        }
        counts
    }

    /// Record count per blueprint area, in order of first appearance
    pub fn count_by_blueprint_area(&self) -> IndexMap<BlueprintArea, usize> {
        let mut counts = IndexMap::new();
        for record in &self.records {
            *counts.entry(record.blueprint_area()).or_insert(0) += 1;
        }
        counts
    }

    /// Collection names in merge order
    pub fn collection_names(&self) -> impl Iterator<Item = &str> {
        self.collections.iter().map(String::as_str)
    }
}

impl Registry<Question> {
    pub fn by_difficulty(&self, difficulty: QuestionDifficulty) -> Vec<&Question> {
        self.records
            .iter()
            .filter(|q| q.difficulty == difficulty)
            .collect()
    }
}

impl Registry<Lesson> {
    pub fn by_difficulty(&self, difficulty: LessonDifficulty) -> Vec<&Lesson> {
        self.records
            .iter()
            .filter(|l| l.difficulty == difficulty)
            .collect()
    }

    /// Lessons of a section sorted by their sequencing order
    pub fn syllabus(&self, section: ExamSection) -> Vec<&Lesson> {
        let mut lessons = self.by_section(section);
        lessons.sort_by_key(|l| l.order);
        lessons
    }
}
