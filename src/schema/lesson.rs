//! Structured lesson record

use super::types::{BlueprintArea, Course, ExamSection, LessonDifficulty};
use serde::{Deserialize, Serialize};

/// One unit of lesson content; each kind carries only its own payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionBlock {
    Text {
        #[serde(default)]
        title: String,
        content: String,
    },
    Table {
        #[serde(default)]
        title: String,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Callout {
        #[serde(default)]
        title: String,
        content: String,
    },
    Warning {
        #[serde(default)]
        title: String,
        content: String,
    },
    Example {
        #[serde(default)]
        title: String,
        content: String,
    },
    List {
        #[serde(default)]
        title: String,
        #[serde(alias = "content")]
        items: Vec<String>,
    },
    Summary {
        #[serde(default)]
        title: String,
        #[serde(alias = "items", alias = "points")]
        content: Vec<String>,
    },
    KeyPoints {
        #[serde(default)]
        title: String,
        points: Vec<String>,
    },
}

/// Block kind tag, as written on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Text,
    Table,
    Callout,
    Warning,
    Example,
    List,
    Summary,
    KeyPoints,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Table => "table",
            Self::Callout => "callout",
            Self::Warning => "warning",
            Self::Example => "example",
            Self::List => "list",
            Self::Summary => "summary",
            Self::KeyPoints => "key_points",
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl SectionBlock {
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Text {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn callout(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Callout {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn warning(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Warning {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn example(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Example {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn table(title: impl Into<String>, headers: &[&str], rows: &[&[&str]]) -> Self {
        Self::Table {
            title: title.into(),
            headers: owned(headers),
            rows: rows.iter().map(|row| owned(row)).collect(),
        }
    }

    pub fn list(title: impl Into<String>, items: &[&str]) -> Self {
        Self::List {
            title: title.into(),
            items: owned(items),
        }
    }

    pub fn summary(title: impl Into<String>, points: &[&str]) -> Self {
        Self::Summary {
            title: title.into(),
            content: owned(points),
        }
    }

    pub fn key_points(title: impl Into<String>, points: &[&str]) -> Self {
        Self::KeyPoints {
            title: title.into(),
            points: owned(points),
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Text { .. } => BlockKind::Text,
            Self::Table { .. } => BlockKind::Table,
            Self::Callout { .. } => BlockKind::Callout,
            Self::Warning { .. } => BlockKind::Warning,
            Self::Example { .. } => BlockKind::Example,
            Self::List { .. } => BlockKind::List,
            Self::Summary { .. } => BlockKind::Summary,
            Self::KeyPoints { .. } => BlockKind::KeyPoints,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Text { title, .. }
            | Self::Table { title, .. }
            | Self::Callout { title, .. }
            | Self::Warning { title, .. }
            | Self::Example { title, .. }
            | Self::List { title, .. }
            | Self::Summary { title, .. }
            | Self::KeyPoints { title, .. } => title,
        }
    }

    /// Items of the list-shaped kinds (list, summary, key points)
    pub fn items(&self) -> Option<&[String]> {
        match self {
            Self::List { items, .. } => Some(items),
            Self::Summary { content, .. } => Some(content),
            Self::KeyPoints { points, .. } => Some(points),
            _ => None,
        }
    }
}

/// Ordered block list of a lesson
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LessonContent {
    pub sections: Vec<SectionBlock>,
}

/// A structured lesson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    #[serde(rename = "courseId")]
    pub course: Course,
    pub section: ExamSection,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Sequencing rank within (course, section); 1-based
    pub order: u32,
    /// Estimated minutes
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub difficulty: LessonDifficulty,
    #[serde(default)]
    pub topics: Vec<String>,
    pub blueprint_area: BlueprintArea,
    #[serde(default)]
    pub content: LessonContent,
}

impl Lesson {
    pub fn new(id: impl Into<String>, area: BlueprintArea, order: u32) -> Self {
        Self {
            id: id.into(),
            course: area.section.course(),
            section: area.section,
            title: String::new(),
            description: String::new(),
            order,
            duration: 0,
            difficulty: LessonDifficulty::default(),
            topics: Vec::new(),
            blueprint_area: area,
            content: LessonContent::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = minutes;
        self
    }

    pub fn with_difficulty(mut self, difficulty: LessonDifficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_topics(mut self, topics: &[&str]) -> Self {
        self.topics = owned(topics);
        self
    }

    pub fn with_block(mut self, block: SectionBlock) -> Self {
        self.content.sections.push(block);
        self
    }

    pub fn blocks(&self) -> &[SectionBlock] {
        &self.content.sections
    }

    /// Table blocks whose rows do not all match the header count
    pub fn malformed_tables(&self) -> impl Iterator<Item = &SectionBlock> {
        self.blocks().iter().filter(|block| match block {
            SectionBlock::Table { headers, rows, .. } => {
                rows.iter().any(|row| row.len() != headers.len())
            }
            _ => false,
        })
    }
}
