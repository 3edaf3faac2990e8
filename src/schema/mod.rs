//! Content record schemas
//!
//! Closed enumerations, the question and lesson records, and the `Record`
//! trait that lets one registry implementation serve both.

mod lesson;
mod question;
mod record;
mod types;

#[cfg(test)]
#[allow(non_snake_case)]
mod tests_types;

pub use lesson::{BlockKind, Lesson, LessonContent, SectionBlock};
pub use question::{AnswerOption, Question};
pub use record::Record;
pub use types::{
    BlueprintArea, Course, ExamSection, LessonDifficulty, QuestionDifficulty, SkillLevel,
};
