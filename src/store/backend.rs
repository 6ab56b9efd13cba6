use std::path::{Path, PathBuf};

use super::StoreError;

/// Where records live by default.
fn default_store_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".iv-ladder")
}

/// Keyed JSON record storage, the local stand-in for the browser's
/// key-value store. Two keys are in use: `ivHistory` and `calculatorState`.
pub trait Storage {
    /// Read the record at `key`, `None` if it does not exist.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Create or overwrite the record at `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the record at `key` (no-op when absent).
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// One JSON file per key under a store directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open a store rooted at `dir`, defaulting to `~/.iv-ladder`.
    pub fn new(dir: Option<&Path>) -> Self {
        Self {
            dir: dir.map(|d| d.to_path_buf()).unwrap_or_else(default_store_dir),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;

        // Write atomically: write to tmp then rename
        let path = self.key_path(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}
