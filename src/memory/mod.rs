//! Memory store
//!
//! Memories are flat text documents kept in the project's memory directory.

pub mod loader;

pub use loader::{load_document, LoadOutcome, MemoryDocument, MemoryStore};
