//! In-memory series store.
//!
//! Records are kept in insertion order. Ids are derived from the last stored
//! record, so an id freed by deleting a record in the middle is never handed
//! out again while a later record exists.

use thiserror::Error;
use tracing::{debug, info};

use crate::{RecordId, SeriesDraft, SeriesRecord};

/// Errors from store mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Id \"{0}\" was not found.")]
    NotFound(RecordId),

    #[error("Title \"{0}\" already exists.")]
    DuplicateTitle(String),
}

/// Ordered collection of every series in the session.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    records: Vec<SeriesRecord>,
}

impl SeriesStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Id the next added record will receive.
    #[must_use]
    pub fn next_id(&self) -> RecordId {
        self.records
            .last()
            .map_or(RecordId(0), |record| record.id.next())
    }

    /// Append a new record built from `draft`.
    pub fn add(&mut self, draft: SeriesDraft) -> Result<&SeriesRecord, StoreError> {
        if self.contains_title(&draft.title) {
            return Err(StoreError::DuplicateTitle(draft.title));
        }

        let id = self.next_id();
        self.records.push(SeriesRecord::from_draft(id, draft));
        info!("Stored series {id}");

        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// Replace every field of the record with `id`, keeping the id.
    ///
    /// The title must not match any current title, the edited record's own
    /// included.
    pub fn replace(&mut self, id: RecordId, draft: SeriesDraft) -> Result<&SeriesRecord, StoreError> {
        let index = self.locate(id).ok_or(StoreError::NotFound(id))?;
        if self.contains_title(&draft.title) {
            return Err(StoreError::DuplicateTitle(draft.title));
        }

        self.records[index] = SeriesRecord::from_draft(id, draft);
        info!("Updated series {id}");
        Ok(&self.records[index])
    }

    /// Remove the record with `id`.
    pub fn remove(&mut self, id: RecordId) -> Result<SeriesRecord, StoreError> {
        let index = self.locate(id).ok_or(StoreError::NotFound(id))?;
        let removed = self.records.remove(index);
        info!("Deleted series {id}");
        Ok(removed)
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        let count = self.records.len();
        self.records.clear();
        info!("Cleared {count} series");
    }

    /// Position of the record with `id`, if stored.
    #[must_use]
    pub fn locate(&self, id: RecordId) -> Option<usize> {
        let index = self.records.iter().position(|record| record.id == id);
        debug!("Locate {id}: {index:?}");
        index
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&SeriesRecord> {
        self.locate(id).map(|index| &self.records[index])
    }

    #[must_use]
    pub fn contains_title(&self, title: &str) -> bool {
        self.records.iter().any(|record| record.title == title)
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[SeriesRecord] {
        &self.records
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, rating: f64) -> SeriesDraft {
        SeriesDraft::new(title, 10, false, rating)
    }

    #[test]
    fn test_ids_follow_record_count() {
        let mut store = SeriesStore::new();
        assert_eq!(store.next_id(), RecordId(0));

        for (i, title) in ["Dark", "Lost", "Fargo"].into_iter().enumerate() {
            assert_eq!(store.next_id().0, store.len() as u64);
            let id = store.add(draft(title, 5.0)).unwrap().id;
            assert_eq!(id, RecordId(i as u64));
        }
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = SeriesStore::new();
        store.add(draft("Dark", 5.0)).unwrap();
        store.add(draft("Lost", 5.0)).unwrap();
        store.remove(RecordId(0)).unwrap();

        assert_eq!(store.add(draft("Fargo", 5.0)).unwrap().id, RecordId(2));
    }

    #[test]
    fn test_next_id_after_deleting_last_record() {
        let mut store = SeriesStore::new();
        store.add(draft("Dark", 5.0)).unwrap();
        store.add(draft("Lost", 5.0)).unwrap();
        store.remove(RecordId(1)).unwrap();

        assert_eq!(store.next_id(), RecordId(1));
    }

    #[test]
    fn test_duplicate_title_leaves_store_unchanged() {
        let mut store = SeriesStore::new();
        store.add(draft("Dark", 5.0)).unwrap();

        let err = store.add(draft("Dark", 9.0)).unwrap_err();
        assert_eq!(err, StoreError::DuplicateTitle("Dark".to_string()));
        assert_eq!(store.len(), 1);
        assert!((store.records()[0].rating - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_replace_keeps_id() {
        let mut store = SeriesStore::new();
        for title in ["Dark", "Lost", "Fargo"] {
            store.add(draft(title, 5.0)).unwrap();
        }

        store
            .replace(RecordId(2), SeriesDraft::new("Fargo S2", 20, true, 9.25))
            .unwrap();

        assert_eq!(store.locate(RecordId(2)), Some(2));
        let record = store.get(RecordId(2)).unwrap();
        assert_eq!(record.id, RecordId(2));
        assert_eq!(record.title, "Fargo S2");
        assert_eq!(record.episodes, 20);
        assert!(record.seen);
    }

    #[test]
    fn test_replace_rejects_any_current_title() {
        let mut store = SeriesStore::new();
        store.add(draft("Dark", 5.0)).unwrap();
        store.add(draft("Lost", 5.0)).unwrap();

        assert_eq!(
            store.replace(RecordId(0), draft("Lost", 1.0)).unwrap_err(),
            StoreError::DuplicateTitle("Lost".to_string())
        );
        assert_eq!(
            store.replace(RecordId(0), draft("Dark", 1.0)).unwrap_err(),
            StoreError::DuplicateTitle("Dark".to_string())
        );
        assert_eq!(
            store.replace(RecordId(7), draft("New", 1.0)).unwrap_err(),
            StoreError::NotFound(RecordId(7))
        );
    }

    #[test]
    fn test_remove() {
        let mut store = SeriesStore::new();
        store.add(draft("Dark", 5.0)).unwrap();

        assert_eq!(
            store.remove(RecordId(3)).unwrap_err(),
            StoreError::NotFound(RecordId(3))
        );
        assert_eq!(store.len(), 1);

        let removed = store.remove(RecordId(0)).unwrap();
        assert_eq!(removed.title, "Dark");
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut store = SeriesStore::new();
        store.add(draft("Dark", 5.0)).unwrap();
        store.add(draft("Lost", 5.0)).unwrap();
        store.clear();
        assert!(store.is_empty());

        store.clear();
        assert!(store.is_empty());
    }
}
