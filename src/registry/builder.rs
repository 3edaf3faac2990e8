//! Registry construction

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{info, instrument, warn};

use super::Registry;
use crate::collections::Collection;
use crate::errors::ContentError;
use crate::schema::{ExamSection, Record};
use crate::validation::{ValidationRules, ValidationSeverity};

impl<R: Record> Registry<R> {
    /// Registry with no records
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build with the default validation rules
    pub fn build(collections: Vec<Collection<R>>) -> Result<Self, ContentError> {
        Self::build_with_rules(collections, &ValidationRules::default())
    }

    /// Every duplicate id and reused lesson order across `collections`
    ///
    /// Records are not validated, and scanning continues past the first
    /// conflict, so a lint pass sees all of them at once.
    pub fn conflicts(collections: &[Collection<R>]) -> Vec<ContentError> {
        let mut conflicts = Vec::new();
        let mut ids: HashMap<&str, &str> = HashMap::new();
        let mut orders: HashMap<(ExamSection, u32), &str> = HashMap::new();

        for collection in collections {
            for record in collection.records() {
                if let Some(&first) = ids.get(record.id()) {
                    conflicts.push(ContentError::DuplicateId {
                        id: record.id().to_string(),
                        first: first.to_string(),
                        second: collection.name().to_string(),
                    });
                    continue;
                }
                ids.insert(record.id(), collection.name());

                if let Some(order) = record.sequence_order() {
                    match orders.entry((record.section(), order)) {
                        Entry::Occupied(first) => {
                            conflicts.push(ContentError::DuplicateOrder {
                                section: record.section().to_string(),
                                order,
                                first: first.get().to_string(),
                                second: record.id().to_string(),
                            });
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(record.id());
                        }
                    }
                }
            }
        }
        conflicts
    }

    /// Merge `collections` in order and freeze the result
    ///
    /// Fails on the first record that does not validate under `rules`, the
    /// first id seen twice, or the first lesson order reused within a
    /// section. No partial registry is returned.
    #[instrument(
        name = "registry.build",
        skip_all,
        fields(kind = R::KIND, collections = collections.len(), record_count = tracing::field::Empty)
    )]
    pub fn build_with_rules(
        collections: Vec<Collection<R>>,
        rules: &ValidationRules,
    ) -> Result<Self, ContentError> {
        let mut registry = Self::empty();
        let mut orders: HashMap<(ExamSection, u32), usize> = HashMap::new();
        let threshold = if rules.fail_on_warnings {
            ValidationSeverity::Warning
        } else {
            ValidationSeverity::Error
        };

        for collection in collections {
            let (name, records) = collection.into_parts();
            let origin = registry.collections.len();
            registry.collections.push(name);

            for record in records {
                let position = registry.records.len();

                match registry.index.entry(record.id().to_string()) {
                    Entry::Occupied(existing) => {
                        let first = registry.origins[*existing.get()];
                        return Err(ContentError::DuplicateId {
                            id: record.id().to_string(),
                            first: registry.collections[first].clone(),
                            second: registry.collections[origin].clone(),
                        });
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(position);
                    }
                }

                let result = record.validate(rules);
                if !result.is_acceptable(rules) {
                    return Err(ContentError::Validation {
                        id: record.id().to_string(),
                        collection: registry.collections[origin].clone(),
                        violations: result.messages_at_least(threshold),
                    });
                }
                if result.has_warnings() {
                    for message in result.messages_at_least(ValidationSeverity::Warning) {
                        warn!(id = record.id(), "{}", message);
                    }
                }

                if let Some(order) = record.sequence_order() {
                    if let Some(&other) = orders.get(&(record.section(), order)) {
                        return Err(ContentError::DuplicateOrder {
                            section: record.section().to_string(),
                            order,
                            first: registry.records[other].id().to_string(),
                            second: record.id().to_string(),
                        });
                    }
                    orders.insert((record.section(), order), position);
                }

                registry.records.push(record);
                registry.origins.push(origin);
            }
        }

        tracing::Span::current().record("record_count", registry.records.len());
        info!(
            "Built {} registry: {} records from {} collections",
            R::KIND,
            registry.records.len(),
            registry.collections.len()
        );
        Ok(registry)
    }
}
