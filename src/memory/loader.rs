//! Memory store loading
//!
//! Reads every document directly inside the memory directory. A document
//! that cannot be read is recorded as [`LoadOutcome::Skipped`] and the
//! rest of the store still loads.

use crate::error::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// A loaded memory document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDocument {
    /// File name inside the memory store
    pub identifier: String,
    /// Document text split on `\n`
    pub lines: Vec<String>,
}

impl MemoryDocument {
    pub fn new(identifier: impl Into<String>, content: &str) -> Self {
        Self {
            identifier: identifier.into(),
            lines: content.split('\n').map(str::to_string).collect(),
        }
    }

    /// Text of a 1-based line, empty when out of range
    pub fn line(&self, line: usize) -> &str {
        line.checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Result of loading a single document
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The document was read
    Loaded(MemoryDocument),
    /// The document could not be read
    Skipped { path: PathBuf, reason: String },
}

/// Load one document from disk
pub fn load_document(path: &Path) -> LoadOutcome {
    let identifier = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => {
            return LoadOutcome::Skipped {
                path: path.to_path_buf(),
                reason: "path has no file name".to_string(),
            }
        }
    };

    match std::fs::read_to_string(path) {
        Ok(content) => LoadOutcome::Loaded(MemoryDocument::new(identifier, &content)),
        Err(e) => LoadOutcome::Skipped {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    }
}

/// Point-in-time view of the memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    dir: PathBuf,
    documents: Vec<MemoryDocument>,
    skipped: Vec<(PathBuf, String)>,
    listing: BTreeSet<String>,
}

impl MemoryStore {
    /// Load all documents with the given extension from `dir`.
    ///
    /// A missing directory yields an empty store. Documents are ordered by
    /// file name.
    pub fn load(dir: &Path, extension: &str) -> Result<Self> {
        let mut store = Self {
            dir: dir.to_path_buf(),
            ..Default::default()
        };

        if !dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "No memory store");
            return Ok(store);
        }

        let mut entries: Vec<_> = std::fs::read_dir(dir)?.flatten().collect();
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let name = entry.file_name().to_string_lossy().into_owned();
            store.listing.insert(name.clone());

            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(extension) {
                continue;
            }

            match load_document(&path) {
                LoadOutcome::Loaded(document) => store.documents.push(document),
                LoadOutcome::Skipped { path, reason } => {
                    tracing::warn!("Skipping memory {}: {}", path.display(), reason);
                    store.skipped.push((path, reason));
                }
            }
        }

        tracing::debug!(
            loaded = store.documents.len(),
            skipped = store.skipped.len(),
            "Loaded memory store"
        );
        Ok(store)
    }

    /// Successfully loaded documents, in file-name order
    pub fn documents(&self) -> &[MemoryDocument] {
        &self.documents
    }

    /// Documents that could not be read, with the reason
    pub fn skipped(&self) -> &[(PathBuf, String)] {
        &self.skipped
    }

    /// Whether a memory with this name exists in the store.
    ///
    /// Names missing from the listing are resolved below the store directory,
    /// ignoring a trailing `/`.
    pub fn contains(&self, name: &str) -> bool {
        if self.listing.contains(name) {
            return true;
        }
        let name = name.trim_end_matches('/');
        !name.is_empty() && self.dir.join(name).exists()
    }
}
