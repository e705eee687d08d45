//! Reference validation against live project state
//!
//! Each reference kind resolves against one authority:
//! - `skill` against the discovered [`SkillSet`]
//! - `memory` against the [`MemoryStore`] listing
//! - `path` against the filesystem below the project root, with bare
//!   skill-directory mentions accepted when the skill exists

use crate::memory::MemoryStore;
use crate::reference::{Reference, ReferenceKind};
use crate::skills::SkillSet;
use std::path::Path;

/// Resolves references against a frozen view of the project
pub struct ReferenceValidator<'a> {
    root: &'a Path,
    skills: &'a SkillSet,
    memories: &'a MemoryStore,
}

impl<'a> ReferenceValidator<'a> {
    pub fn new(root: &'a Path, skills: &'a SkillSet, memories: &'a MemoryStore) -> Self {
        Self {
            root,
            skills,
            memories,
        }
    }

    /// Whether the reference still resolves. Never fails: anything that
    /// cannot be resolved is simply invalid.
    pub fn is_valid(&self, reference: &Reference) -> bool {
        match reference.kind {
            ReferenceKind::Skill => self.skills.contains(&reference.text),
            ReferenceKind::Memory => self.memories.contains(&reference.text),
            ReferenceKind::Path => self.path_exists(&reference.text),
        }
    }

    fn path_exists(&self, text: &str) -> bool {
        let clean = text.strip_prefix("./").unwrap_or(text);

        if clean.ends_with('/') || !clean.contains('/') {
            let skill_name = clean.trim_end_matches('/');
            if self.skills.contains(skill_name) {
                return true;
            }
        }

        self.root.join(clean).exists()
    }
}
