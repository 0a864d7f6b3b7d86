//! Persistence error types.
//!
//! Defined in `signdrill-core` so callers of any [`crate::store::ReviewStore`]
//! implementation can tell a first run (nothing saved yet) from a real
//! failure without string matching.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or saving review state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    /// The backing file exists but is not a JSON object of review items.
    #[error("corrupt review state in {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The in-memory state could not be encoded.
    #[error("failed to serialize review state: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    /// Returns `true` if nothing has been saved at the location yet.
    pub fn is_missing(&self) -> bool {
        matches!(self, StoreError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
