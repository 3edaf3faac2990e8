//! JSON / YAML collection loader
//!
//! A content file holds either a bare array of records or an object
//! `{ name, records }`. Without a `name` the collection is named after the
//! file stem.

use super::Collection;
use crate::errors::ContentError;
use crate::schema::Record;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

const EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

fn parse_document(path: &Path, text: &str) -> Result<serde_json::Value, ContentError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "json" => serde_json::from_str(text).map_err(|e| ContentError::load(path, e)),
        "yaml" | "yml" => serde_yaml::from_str(text).map_err(|e| ContentError::load(path, e)),
        other => Err(ContentError::load(
            path,
            format!("unsupported extension '{other}' (expected json, yaml or yml)"),
        )),
    }
}

/// Load one collection file
#[instrument(name = "collections.load", fields(kind = R::KIND, record_count = tracing::field::Empty))]
pub fn load_collection<R: Record>(path: &Path) -> Result<Collection<R>, ContentError> {
    let text = std::fs::read_to_string(path).map_err(|e| ContentError::load(path, e))?;
    let document = parse_document(path, &text)?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unnamed")
        .to_string();

    let (name, records) = match document {
        serde_json::Value::Array(_) => (stem, document),
        serde_json::Value::Object(mut map) => {
            let records = map.remove("records").ok_or_else(|| {
                ContentError::load(path, "expected an array or an object with 'records'")
            })?;
            let name = match map.remove("name") {
                Some(serde_json::Value::String(name)) if !name.trim().is_empty() => name,
                Some(serde_json::Value::String(_)) | None => stem,
                Some(_) => return Err(ContentError::load(path, "'name' must be a string")),
            };
            (name, records)
        }
        _ => {
            return Err(ContentError::load(
                path,
                "expected an array or an object with 'records'",
            ))
        }
    };

    let records: Vec<R> =
        serde_json::from_value(records).map_err(|e| ContentError::load(path, e))?;

    tracing::Span::current().record("record_count", records.len());
    debug!(collection = %name, "Loaded {} {}s", records.len(), R::KIND);

    Ok(Collection::new(name, records))
}

/// Load a file, or every content file under a directory in sorted path order
pub fn load_collections<R: Record>(path: &Path) -> Result<Vec<Collection<R>>, ContentError> {
    if path.is_file() {
        return Ok(vec![load_collection(path)?]);
    }
    if !path.is_dir() {
        return Err(ContentError::load(path, "no such file or directory"));
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(path).follow_links(true) {
        let entry = entry.map_err(|e| ContentError::load(path, e))?;
        if entry.file_type().is_file() && is_content_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();

    let collections = files
        .iter()
        .map(|file| load_collection(file))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "Loaded {} {} collection(s) from {}",
        collections.len(),
        R::KIND,
        path.display()
    );
    Ok(collections)
}
