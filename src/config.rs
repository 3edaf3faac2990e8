use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::ContentError;
use crate::validation::ValidationRules;

/// Default config filename, looked up in the working directory
pub const CONFIG_FILENAME: &str = ".exam-content.toml";

/// Content library configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Configuration file version
    #[serde(default = "default_version")]
    pub version: String,

    /// Where records come from
    #[serde(default)]
    pub library: LibraryConfig,

    /// Validation thresholds applied at build time
    #[serde(default)]
    pub validation: ValidationRules,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            library: LibraryConfig::default(),
            validation: ValidationRules::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Include the built-in collections ahead of any loaded ones
    pub include_builtin: bool,

    /// Question files or directories (relative to the config file)
    pub question_paths: Vec<PathBuf>,

    /// Lesson files or directories (relative to the config file)
    pub lesson_paths: Vec<PathBuf>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            question_paths: vec![],
            lesson_paths: vec![],
        }
    }
}

impl ContentConfig {
    /// Load configuration from TOML file
    ///
    /// Relative content paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|e| ContentError::load(path, e))?;
        let mut config: Self = toml::from_str(&content)
            .map_err(|e| ContentError::Config(format!("{}: {}", path.display(), e)))?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Load `path` if it exists; a missing file is not an error
    pub fn load_optional(path: &Path) -> Result<Option<Self>, ContentError> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: &Path) -> Result<(), ContentError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ContentError::Config(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ContentError::load(path, e))?;
        Ok(())
    }

    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |paths: &mut Vec<PathBuf>| {
            for p in paths.iter_mut() {
                if p.is_relative() {
                    *p = base.join(&*p);
                }
            }
        };
        resolve(&mut self.library.question_paths);
        resolve(&mut self.library.lesson_paths);
    }
}
