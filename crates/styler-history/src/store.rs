//! The bounded history store

use std::sync::Arc;

use styler_types::HistoryRecord;

use crate::backend::StorageBackend;

/// Bounded, newest-first collection of completed generations
///
/// The in-memory list is the source of truth. Every mutation is written
/// through to the backend, but a failed write only logs a warning: the
/// session keeps its history and the next successful write catches the
/// persisted copy up.
pub struct HistoryStore {
    backend: Arc<dyn StorageBackend>,
    capacity: usize,
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    /// Load the store from its backend
    ///
    /// A missing slot starts an empty history. A corrupt slot is logged
    /// and discarded rather than propagated, so one bad write never locks
    /// the user out of the feature. A slot holding more records than the
    /// capacity is truncated on load.
    #[must_use]
    pub fn load(backend: Arc<dyn StorageBackend>, capacity: usize) -> Self {
        let mut records = match backend.load() {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryRecord>>(&raw) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(error = %e, "discarding corrupt history");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read history, starting empty");
                Vec::new()
            }
        };

        if records.len() > capacity {
            tracing::warn!(
                found = records.len(),
                capacity,
                "persisted history exceeds capacity, truncating"
            );
            records.truncate(capacity);
        }

        Self {
            backend,
            capacity,
            records,
        }
    }

    /// Insert a record at the front, evicting the oldest beyond capacity
    pub fn insert(&mut self, record: HistoryRecord) {
        self.records.insert(0, record);
        self.records.truncate(self.capacity);
        self.persist();
    }

    /// Remove the record with the given id; absent ids are a no-op
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = self.records.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// All records, newest first
    #[must_use]
    pub fn list(&self) -> &[HistoryRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn persist(&self) {
        let serialized = match serde_json::to_string(&self.records) {
            Ok(serialized) => serialized,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize history");
                return;
            }
        };
        if let Err(e) = self.backend.store(&serialized) {
            tracing::warn!(error = %e, "failed to persist history, keeping in-memory copy");
        }
    }
}
