//! JSON file store.
//!
//! The file holds one object mapping sign identifiers to review items:
//!
//! ```json
//! { "Stop": { "ease": 2.38, "intervalDays": 1, "due": "2025-01-02", "streak": 1 } }
//! ```

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use signdrill_core::schedule::ReviewItem;
use signdrill_core::store::{ReviewMap, ReviewStore};
use signdrill_core::StoreError;

/// Persists the review map as pretty-printed JSON at a fixed path.
///
/// Saves go through a temporary file in the same directory and an atomic
/// rename, so a crash mid-write leaves the previous state intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ReviewStore for JsonFileStore {
    fn name(&self) -> &str {
        "json"
    }

    fn load(&self) -> Result<ReviewMap, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                let err = self.io_error(e);
                if err.is_missing() {
                    tracing::debug!("no review state at {}, starting fresh", self.path.display());
                    return Ok(ReviewMap::new());
                }
                return Err(err);
            }
        };

        let raw: BTreeMap<String, serde_json::Value> =
            serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        // Entries that fail to decode are dropped one by one; the rest still load.
        let mut items = ReviewMap::new();
        for (sign, value) in raw {
            match serde_json::from_value::<ReviewItem>(value) {
                Ok(item) => {
                    items.insert(sign, item);
                }
                Err(e) => tracing::warn!("skipping review state for {sign:?}: {e}"),
            }
        }

        tracing::debug!("loaded {} review item(s) from {}", items.len(), self.path.display());
        Ok(items)
    }

    fn save(&self, items: &ReviewMap) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(items)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|_| tmp.flush())
            .map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        tracing::debug!("saved {} review item(s) to {}", items.len(), self.path.display());
        Ok(())
    }
}
