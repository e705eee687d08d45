//! Skill discovery
//!
//! A skill is any directory matching `plugins/*/skills/<name>/SKILL.md`.
//! The skill name is the directory holding the descriptor.

use crate::config::ValidatorConfig;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

/// Depth of the descriptor below the plugins directory
const DESCRIPTOR_DEPTH: usize = 4;

/// Set of discovered skill names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    names: BTreeSet<String>,
}

impl SkillSet {
    /// Discover skills below the configured plugins directory of `root`.
    ///
    /// A missing plugins directory yields an empty set. Unreadable
    /// subdirectories are logged and skipped.
    pub fn discover(root: &Path, config: &ValidatorConfig) -> Self {
        let plugins_dir = config.plugins_dir_in(root);
        let mut names = BTreeSet::new();

        if !plugins_dir.is_dir() {
            tracing::debug!(dir = %plugins_dir.display(), "No plugins directory");
            return Self { names };
        }

        let walker = WalkDir::new(&plugins_dir)
            .follow_links(true)
            .min_depth(DESCRIPTOR_DEPTH)
            .max_depth(DESCRIPTOR_DEPTH);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable plugin path: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file()
                || entry.file_name().to_str() != Some(config.skill_descriptor.as_str())
            {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&plugins_dir) else {
                continue;
            };
            let parts: Vec<_> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();

            // <plugin>/<skills_subdir>/<skill>/<descriptor>
            if parts.len() == DESCRIPTOR_DEPTH && parts[1] == config.skills_subdir {
                names.insert(parts[2].clone());
            }
        }

        tracing::debug!(count = names.len(), "Discovered skills");
        Self { names }
    }

    /// Whether `name` is a discovered skill
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Skill names in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl FromIterator<String> for SkillSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
