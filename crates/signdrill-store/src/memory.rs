//! In-memory store for tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, MutexGuard};

use signdrill_core::store::{ReviewMap, ReviewStore};
use signdrill_core::StoreError;

/// A review store that keeps state in memory and counts saves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<ReviewMap>,
    save_count: AtomicU32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `items`.
    pub fn with_items(items: ReviewMap) -> Self {
        Self {
            items: Mutex::new(items),
            save_count: AtomicU32::new(0),
        }
    }

    /// Number of times [`ReviewStore::save`] has been called.
    pub fn save_count(&self) -> u32 {
        self.save_count.load(Ordering::Relaxed)
    }

    fn guard(&self) -> MutexGuard<'_, ReviewMap> {
        // Saves replace the map wholesale, so a poisoned lock still guards a complete map.
        self.items.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ReviewStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn load(&self) -> Result<ReviewMap, StoreError> {
        Ok(self.guard().clone())
    }

    fn save(&self, items: &ReviewMap) -> Result<(), StoreError> {
        self.save_count.fetch_add(1, Ordering::Relaxed);
        *self.guard() = items.clone();
        Ok(())
    }
}
