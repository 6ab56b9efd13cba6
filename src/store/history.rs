use crate::model::HistoryEntry;

use super::StoreError;
use super::backend::Storage;

/// Storage key for the history log.
const HISTORY_KEY: &str = "ivHistory";

/// Maximum number of entries kept; an append past this evicts the oldest.
pub const MAX_HISTORY_ENTRIES: usize = 100;

/// Bounded newest-first log of past calculations.
///
/// Every operation is a single load-mutate-save pass, so no partial state
/// is observable between an append and its eviction step.
pub struct HistoryStore<S> {
    storage: S,
}

impl<S: Storage> HistoryStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All entries, newest first. A missing or malformed record reads as
    /// an empty log.
    pub fn list(&self) -> Vec<HistoryEntry> {
        match self.storage.read(HISTORY_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// The entry at `index`, `None` when out of range.
    pub fn get(&self, index: usize) -> Option<HistoryEntry> {
        self.list().into_iter().nth(index)
    }

    /// Insert at the front, evicting the oldest entry past capacity. The
    /// numeric entry is durable before this returns; the chart snapshot
    /// follows separately via [`attach_image`](Self::attach_image).
    pub fn append(&self, entry: HistoryEntry) -> Result<(), StoreError> {
        let mut entries = self.list();
        entries.insert(0, entry);
        entries.truncate(MAX_HISTORY_ENTRIES);
        self.save(&entries)
    }

    /// Patch the chart snapshot onto the entry created at `date`. Silent
    /// no-op when that entry has been evicted or deleted since the append.
    pub fn attach_image(&self, date: &str, img: &str) -> Result<(), StoreError> {
        let mut entries = self.list();
        let Some(entry) = entries.iter_mut().find(|e| e.date == date) else {
            return Ok(());
        };
        entry.img = Some(img.to_string());
        self.save(&entries)
    }

    /// Remove the entry at `index`; later entries shift down by one.
    /// Out-of-range is a no-op.
    pub fn delete_at(&self, index: usize) -> Result<(), StoreError> {
        let mut entries = self.list();
        if index >= entries.len() {
            return Ok(());
        }
        entries.remove(index);
        self.save(&entries)
    }

    /// Drop the whole log.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.storage.remove(HISTORY_KEY)
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_string(entries)?;
        self.storage.write(HISTORY_KEY, &json)
    }
}
