// Library exports for the exam content registry
pub mod blueprint;
pub mod collections;
pub mod config;
pub mod errors;
pub mod library;
pub mod registry;
pub mod schema;
pub mod stats;
pub mod validation;

// Re-export key types for convenience
pub use collections::{
    builtin_lessons, builtin_questions, load_collection, load_collections, Collection,
};
pub use config::ContentConfig;
pub use errors::ContentError;
pub use library::{ContentLibrary, Entry};
pub use registry::Registry;
pub use schema::{
    AnswerOption, BlockKind, BlueprintArea, Course, ExamSection, Lesson, LessonContent,
    LessonDifficulty, Question, QuestionDifficulty, Record, SectionBlock, SkillLevel,
};
pub use stats::{AreaCoverage, BlueprintCoverage, RegistryStats};
pub use validation::{ValidationResult, ValidationRules, ValidationSeverity, ValidationViolation};
