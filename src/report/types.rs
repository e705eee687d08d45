//! Aggregated validation results

use crate::reference::{ReferenceKind, StaleReference};
use serde::{Deserialize, Serialize};

/// Result of validating a whole memory store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Documents loaded from the memory store
    pub total_memories: usize,
    /// Documents with no stale references
    pub valid_memories: usize,
    /// Stale references, grouped by document in load order and by line within one
    pub stale_references: Vec<StaleReference>,
}

impl ValidationReport {
    /// Empty, valid report (no project or no memories)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Record one document's stale references
    pub fn add_document(&mut self, stale: Vec<StaleReference>) {
        self.total_memories += 1;
        if stale.is_empty() {
            self.valid_memories += 1;
        }
        self.stale_references.extend(stale);
    }

    pub fn is_valid(&self) -> bool {
        self.stale_references.is_empty()
    }

    pub fn stale_count(&self) -> usize {
        self.stale_references.len()
    }

    /// Machine-readable form with stable key order
    pub fn to_structured(&self) -> StructuredReport {
        StructuredReport {
            valid: self.is_valid(),
            total_memories: self.total_memories,
            valid_memories: self.valid_memories,
            stale_count: self.stale_count(),
            stale_references: self
                .stale_references
                .iter()
                .map(|s| StructuredStale {
                    file: s.source_document.clone(),
                    reference: s.reference.text.clone(),
                    kind: s.reference.kind,
                    line: s.reference.line,
                })
                .collect(),
        }
    }
}

/// Structured report, serialized in field declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredReport {
    pub valid: bool,
    pub total_memories: usize,
    pub valid_memories: usize,
    pub stale_count: usize,
    pub stale_references: Vec<StructuredStale>,
}

/// One stale entry in the structured report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredStale {
    pub file: String,
    pub reference: String,
    #[serde(rename = "type")]
    pub kind: ReferenceKind,
    pub line: usize,
}
