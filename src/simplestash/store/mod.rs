//! # Storage Layer
//!
//! This module defines the storage abstraction for simplestash. The
//! [`StoreBackend`] trait allows the application to work with different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one YAML file
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! For `FileStore` the whole stash lives in a single YAML document:
//! ```text
//! firstlaunch: false
//! links:
//!   Home: https://example.com
//! ```
//!
//! The loader tolerates any key order (the file is meant to be hand-editable)
//! but rejects a document missing either required key. Every mutation is a
//! whole-file rewrite; there is no partial/append update and no file locking.
//! A second process racing a load/mutate/save cycle loses the race
//! (last-save-wins), which is an accepted limitation of the single-user
//! design.

use crate::error::Result;
use crate::model::LinkStore;

pub mod fs;
pub mod memory;

/// Abstract interface for stash persistence.
pub trait StoreBackend {
    /// Whether the backing store has been created yet.
    fn exists(&self) -> bool;

    /// Load the full store. Fails with `StoreMissing` when the backing file
    /// does not exist and `StoreCorrupt` when it cannot be parsed or lacks a
    /// required key.
    fn load(&self) -> Result<LinkStore>;

    /// Serialize the full store, overwriting the previous contents.
    fn save(&mut self, store: &LinkStore) -> Result<()>;

    /// Create the store with defaults iff it does not exist yet. Never
    /// overwrites an existing store; returns whatever is persisted.
    fn initialize(&mut self) -> Result<LinkStore>;
}
