//! Content registry
//!
//! A `Registry<R>` is the frozen, indexed union of every collection of one
//! record kind. It is built once at startup, rejecting duplicate ids,
//! colliding lesson orders and records that fail validation, and is then
//! shared read-only.
//!
//! ## Observability
//!
//! Construction and queries are instrumented with tracing spans:
//! - `registry.build` - Collection merge and validation
//! - `registry.get` - Id lookups
//! - `registry.by_section` / `registry.by_blueprint_area` - Filters
//! - `registry.search` - Free-text search

mod builder;
mod core;

#[cfg(test)]
#[allow(non_snake_case)]
mod tests_registry;

use std::collections::HashMap;

/// Immutable, id-indexed set of records of one kind
#[derive(Debug, Clone)]
pub struct Registry<R> {
    /// Records in collection order, then authored order
    pub(crate) records: Vec<R>,
    /// Collection names; `origins[i]` indexes into this
    pub(crate) collections: Vec<String>,
    pub(crate) origins: Vec<usize>,
    pub(crate) index: HashMap<String, usize>,
}

impl<R> Default for Registry<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            collections: Vec::new(),
            origins: Vec::new(),
            index: HashMap::new(),
        }
    }
}
