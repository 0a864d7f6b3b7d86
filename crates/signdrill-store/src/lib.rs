//! signdrill-store — Review-state persistence and configuration.
//!
//! Implements the `ReviewStore` trait from `signdrill-core` for a JSON file
//! on disk and for an in-memory map, and loads the TOML configuration that
//! decides which store and vocabulary a session uses.

pub mod config;
pub mod json;
pub mod memory;

pub use config::{create_store, load_config_from, SigndrillConfig};
pub use json::JsonFileStore;
pub use memory::MemoryStore;
