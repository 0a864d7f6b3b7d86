//! signdrill-core — Gesture recognition and review scheduling.
//!
//! This crate holds the pure computations signdrill is built on: single-frame
//! sign classification from hand landmarks, and the spaced-repetition state
//! transition that decides when each sign is due again. Nothing here performs
//! I/O; persistence is reached through the [`store::ReviewStore`] trait.

pub mod error;
pub mod fixtures;
pub mod geometry;
pub mod gestures;
pub mod hand;
pub mod landmarks;
pub mod progress;
pub mod recognizer;
pub mod schedule;
pub mod store;

pub use error::StoreError;
pub use gestures::GestureResult;
pub use landmarks::{Frame, HandLandmarks, Point};
pub use recognizer::{recognize, Sign};
pub use schedule::{is_due, review_outcome, ReviewItem};
pub use store::{ReviewMap, ReviewStore};
