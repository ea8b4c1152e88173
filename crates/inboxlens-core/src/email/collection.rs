//! Ordered in-memory email collection.

use std::collections::HashSet;

use super::model::EmailRecord;
use crate::filter::FilterCriteria;
use crate::{Error, Result};

/// Insertion-ordered set of email records with unique identifiers.
///
/// Records are immutable once the collection is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailCollection {
    records: Vec<EmailRecord>,
}

impl EmailCollection {
    /// Builds a collection, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateEmailId`] if two records share an id.
    pub fn new(records: Vec<EmailRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(Error::DuplicateEmailId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Returns the records matching every constraint set in `criteria`,
    /// in collection order.
    #[must_use]
    pub fn apply_filter(&self, criteria: &FilterCriteria) -> Vec<&EmailRecord> {
        if criteria.is_empty() {
            return self.records.iter().collect();
        }
        self.records
            .iter()
            .filter(|record| criteria.matches(record))
            .collect()
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&EmailRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// All records in order.
    #[must_use]
    pub fn records(&self) -> &[EmailRecord] {
        &self.records
    }

    /// Iterates records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, EmailRecord> {
        self.records.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a EmailCollection {
    type Item = &'a EmailRecord;
    type IntoIter = std::slice::Iter<'a, EmailRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
