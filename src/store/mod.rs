pub mod backend;
pub mod history;
pub mod session;

pub use backend::{FileStorage, Storage};
pub use history::{HistoryStore, MAX_HISTORY_ENTRIES};
pub use session::SessionBridge;

use thiserror::Error;

/// Errors from the persistence layer. Reads that fail degrade to an empty
/// log or absent snapshot at the store API; write failures surface so the
/// caller can report them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed stored record: {0}")]
    Json(#[from] serde_json::Error),
}
