//! Generic ordered collection shared by every entity type.

use super::{StoreError, StoreResult};
use crate::model::Record;
use log::debug;

/// Insertion-ordered list of records with key-based access.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Duplicate keys are allowed.
    pub fn add(&mut self, record: T) {
        self.records.push(record);
    }

    /// Overwrites the non-key fields of the first record sharing `record`'s key.
    ///
    /// # Errors
    /// - `NotFound` when no record has that key; the collection is unchanged.
    pub fn update(&mut self, record: &T) -> StoreResult<()> {
        let Some(existing) = self.find_mut(record.key()) else {
            debug!(
                "event=record_update module=store status=miss entity={}",
                T::KIND
            );
            return Err(StoreError::NotFound {
                entity: T::KIND,
                key: record.key().to_string(),
            });
        };

        existing.overwrite_from(record);
        Ok(())
    }

    /// Removes every record with `key` and returns how many were removed.
    ///
    /// # Errors
    /// - `NotFound` when nothing matched.
    pub fn delete(&mut self, key: &str) -> StoreResult<usize> {
        let before = self.records.len();
        self.records.retain(|record| record.key() != key);
        let removed = before - self.records.len();

        if removed == 0 {
            debug!(
                "event=record_delete module=store status=miss entity={}",
                T::KIND
            );
            return Err(StoreError::NotFound {
                entity: T::KIND,
                key: key.to_string(),
            });
        }

        Ok(removed)
    }

    /// Returns the first record with `key`.
    pub fn find(&self, key: &str) -> Option<&T> {
        self.records.iter().find(|record| record.key() == key)
    }

    pub(crate) fn find_mut(&mut self, key: &str) -> Option<&mut T> {
        self.records.iter_mut().find(|record| record.key() == key)
    }

    /// Returns all records whose search fields contain `term`, in insertion order.
    pub fn search(&self, term: &str) -> Vec<&T> {
        self.records
            .iter()
            .filter(|record| record.matches(term))
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl<'a, T: Record> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Collection;
    use crate::model::owner::Owner;

    #[test]
    fn update_touches_only_first_duplicate() {
        let mut owners = Collection::new();
        owners.add(Owner::new("K1", "first", "", ""));
        owners.add(Owner::new("K1", "second", "", ""));

        owners
            .update(&Owner::new("K1", "renamed", "addr", "phone"))
            .unwrap();

        let names: Vec<_> = owners.iter().map(|o| o.full_name.as_str()).collect();
        assert_eq!(names, vec!["renamed", "second"]);
    }

    #[test]
    fn delete_removes_every_duplicate() {
        let mut owners = Collection::new();
        owners.add(Owner::new("K1", "a", "", ""));
        owners.add(Owner::new("K2", "b", "", ""));
        owners.add(Owner::new("K1", "c", "", ""));

        assert_eq!(owners.delete("K1").unwrap(), 2);
        assert_eq!(owners.len(), 1);
        assert!(owners.find("K1").is_none());
    }

    #[test]
    fn empty_term_matches_all_records() {
        let mut owners = Collection::new();
        owners.add(Owner::new("K1", "", "", ""));
        owners.add(Owner::new("K2", "named", "", ""));

        assert_eq!(owners.search("").len(), 2);
    }
}
