//! Reference data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which live authority a reference resolves against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    /// A file or directory relative to the project root
    Path,
    /// A discovered skill bundle
    Skill,
    /// A sibling memory document
    Memory,
}

impl ReferenceKind {
    /// Lowercase tag used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Path => "path",
            ReferenceKind::Skill => "skill",
            ReferenceKind::Memory => "memory",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate reference extracted from one line of a memory document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Literal token as written
    pub text: String,
    /// Reference kind
    pub kind: ReferenceKind,
    /// 1-based line number
    pub line: usize,
}

impl Reference {
    pub fn new(text: impl Into<String>, kind: ReferenceKind, line: usize) -> Self {
        Self {
            text: text.into(),
            kind,
            line,
        }
    }
}

/// A reference that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleReference {
    /// The unresolved reference
    pub reference: Reference,
    /// Identifier of the memory document it came from
    pub source_document: String,
    /// Leading part of the source line
    pub context: String,
}

impl StaleReference {
    /// Build a stale entry, truncating the context to `width` characters
    pub fn new(
        reference: Reference,
        source_document: impl Into<String>,
        line_text: &str,
        width: usize,
    ) -> Self {
        Self {
            reference,
            source_document: source_document.into(),
            context: line_text.chars().take(width).collect(),
        }
    }
}
