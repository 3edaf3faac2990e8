//! Content library
//!
//! The question registry and the lesson registry, built together once at
//! startup and then handed by reference to whatever serves content.

use tracing::{info, instrument};

use crate::collections::{self, Collection};
use crate::config::ContentConfig;
use crate::errors::ContentError;
use crate::registry::Registry;
use crate::schema::{Lesson, Question, Record};
use crate::stats::RegistryStats;
use crate::validation::ValidationRules;

/// Frozen question and lesson registries
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    pub questions: Registry<Question>,
    pub lessons: Registry<Lesson>,
}

/// A record of either kind, as returned by [`ContentLibrary::find`]
#[derive(Debug, Clone, Copy)]
pub enum Entry<'a> {
    Question(&'a Question),
    Lesson(&'a Lesson),
}

impl ContentLibrary {
    /// Library built from the built-in collections only
    pub fn standard() -> Result<Self, ContentError> {
        Self::from_collections(
            collections::builtin_questions(),
            collections::builtin_lessons(),
            &ValidationRules::default(),
        )
    }

    pub fn from_collections(
        questions: Vec<Collection<Question>>,
        lessons: Vec<Collection<Lesson>>,
        rules: &ValidationRules,
    ) -> Result<Self, ContentError> {
        Ok(Self {
            questions: Registry::build_with_rules(questions, rules)?,
            lessons: Registry::build_with_rules(lessons, rules)?,
        })
    }

    /// Built-ins (if enabled) followed by every configured file, in order
    #[instrument(name = "library.from_config", skip_all)]
    pub fn from_config(config: &ContentConfig) -> Result<Self, ContentError> {
        let questions = gather(
            config.library.include_builtin,
            collections::builtin_questions,
            &config.library.question_paths,
        )?;
        let lessons = gather(
            config.library.include_builtin,
            collections::builtin_lessons,
            &config.library.lesson_paths,
        )?;

        let library = Self::from_collections(questions, lessons, &config.validation)?;
        info!(
            questions = library.questions.len(),
            lessons = library.lessons.len(),
            "Content library ready"
        );
        Ok(library)
    }

    /// Look an id up in both registries, questions first
    pub fn find(&self, id: &str) -> Option<Entry<'_>> {
        self.questions
            .get(id)
            .map(Entry::Question)
            .or_else(|| self.lessons.get(id).map(Entry::Lesson))
    }

    pub fn question_stats(&self) -> RegistryStats {
        RegistryStats::compute(&self.questions)
    }

    pub fn lesson_stats(&self) -> RegistryStats {
        RegistryStats::compute(&self.lessons)
    }
}

fn gather<R: Record>(
    include_builtin: bool,
    builtin: fn() -> Vec<Collection<R>>,
    paths: &[std::path::PathBuf],
) -> Result<Vec<Collection<R>>, ContentError> {
    let mut out = if include_builtin { builtin() } else { Vec::new() };
    for path in paths {
        out.extend(collections::load_collections(path)?);
    }
    Ok(out)
}
