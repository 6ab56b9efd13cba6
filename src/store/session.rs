use crate::model::WorkingState;

use super::StoreError;
use super::backend::Storage;

/// Storage key for the navigation snapshot slot.
const STATE_KEY: &str = "calculatorState";

/// Single-slot bridge for the working state across a view-replacing
/// navigation. Restore is destructive: a snapshot is consumed exactly
/// once, after which the caller falls back to defaults.
pub struct SessionBridge<S> {
    storage: S,
}

impl<S: Storage> SessionBridge<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Overwrite the slot.
    pub fn save(&self, state: &WorkingState) -> Result<(), StoreError> {
        let json = serde_json::to_string(state)?;
        self.storage.write(STATE_KEY, &json)
    }

    /// Read and clear the slot. Absent or malformed reads as `None`; a bad
    /// record is cleared rather than left around to fail again.
    pub fn restore(&self) -> Option<WorkingState> {
        let json = self.storage.read(STATE_KEY).ok().flatten()?;
        let _ = self.storage.remove(STATE_KEY);
        serde_json::from_str(&json).ok()
    }
}
