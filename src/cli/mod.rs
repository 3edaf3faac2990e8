//! CLI command logic - extracted for testability
//!
//! Rendering lives in pure functions returning `String`; the `cmd_*`
//! entry points print them.

#![cfg(feature = "native")]

pub mod inspect;
pub mod lint;
pub mod stats;

use exam_content::config::CONFIG_FILENAME;
use exam_content::{ContentConfig, ContentLibrary};
use std::path::Path;
use tracing::debug;

/// Output format for commands that can emit JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Which registry a command addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RecordKind {
    Questions,
    Lessons,
}

/// Explicit `--config` path, else `.exam-content.toml` if present, else defaults
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<ContentConfig> {
    let config = match explicit {
        Some(path) => ContentConfig::load(path)?,
        None => ContentConfig::load_optional(Path::new(CONFIG_FILENAME))?.unwrap_or_default(),
    };
    debug!(
        include_builtin = config.library.include_builtin,
        question_paths = config.library.question_paths.len(),
        lesson_paths = config.library.lesson_paths.len(),
        "Resolved configuration"
    );
    Ok(config)
}

/// Build the library once for a command
pub fn load_library(config: &ContentConfig) -> anyhow::Result<ContentLibrary> {
    Ok(ContentLibrary::from_config(config)?)
}

/// First line of `text`, cut to `max` characters
pub(crate) fn truncate(text: &str, max: usize) -> String {
    let line = text.lines().next().unwrap_or("");
    if line.chars().count() <= max {
        return line.to_string();
    }
    let mut out: String = line.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
