//! Content library errors
//!
//! Error types for collection loading, record validation and registry
//! construction. Lookups that miss are not errors; they return `None`.

use thiserror::Error;

/// Errors that can occur while loading, validating or indexing content
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Duplicate id '{id}' in collections '{first}' and '{second}'")]
    DuplicateId {
        id: String,
        first: String,
        second: String,
    },

    #[error("Duplicate order {order} in {section}: '{first}' and '{second}'")]
    DuplicateOrder {
        section: String,
        order: u32,
        first: String,
        second: String,
    },

    #[error("Record '{id}' in collection '{collection}' failed validation: {}", .violations.join("; "))]
    Validation {
        id: String,
        collection: String,
        violations: Vec<String>,
    },

    #[error("Unknown exam section: {0}")]
    UnknownSection(String),

    #[error("Unknown blueprint area: {0}")]
    UnknownBlueprintArea(String),

    #[error("Invalid {kind}: {value}")]
    InvalidValue { kind: &'static str, value: String },

    #[error("Failed to load {path}: {message}")]
    Load { path: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ContentError {
    pub(crate) fn invalid(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind,
            value: value.into(),
        }
    }

    pub(crate) fn load(path: &std::path::Path, message: impl std::fmt::Display) -> Self {
        Self::Load {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }
}
