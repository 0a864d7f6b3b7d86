//! The persistence seam for review state.
//!
//! The scheduler never touches storage itself. Callers load a [`ReviewMap`]
//! through a [`ReviewStore`], apply review outcomes, and save it back.
//! Implementations live in `signdrill-store`.

use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::schedule::ReviewItem;

/// Review state for every sign seen so far, keyed by sign identifier.
pub type ReviewMap = BTreeMap<String, ReviewItem>;

/// Trait for backends that persist the review map between sessions.
pub trait ReviewStore: Send + Sync {
    /// Human-readable backend name (e.g. "json").
    fn name(&self) -> &str;

    /// Load the full review map. A store with nothing saved yields an empty map.
    fn load(&self) -> Result<ReviewMap, StoreError>;

    /// Replace the persisted review map.
    fn save(&self, items: &ReviewMap) -> Result<(), StoreError>;
}
