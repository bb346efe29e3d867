//! # Storage Layer
//!
//! The [`DocumentStore`] trait abstracts persistence of the single
//! [`Document`] that holds all application state.
//!
//! There are no partial or per-record writes: every mutation loads the
//! whole document, edits an in-memory copy, and saves the whole document
//! back. Access is strictly serialized by the single-threaded command flow,
//! so the store needs no locking.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one pretty-printed JSON file
//!   (`petcare-v1.json`) in the data directory. An absent or malformed
//!   file loads as the default empty document, never as an error — the
//!   user starts fresh instead of being locked out of their data.
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing. No
//!   persistence, fast isolated test execution.

use crate::error::Result;
use crate::model::Document;

pub mod fs;
pub mod memory;

/// Abstract interface for document persistence.
pub trait DocumentStore {
    /// Read the persisted document. Absent or structurally unparsable
    /// state loads as the default empty document.
    fn load(&self) -> Result<Document>;

    /// Persist the full document.
    fn save(&mut self, doc: &Document) -> Result<()>;
}
