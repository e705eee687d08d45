//! Memory validator configuration
//!
//! Every field has a default matching the conventional project layout
//! (`.serena/memories` for the memory store, `plugins/*/skills/*/SKILL.md`
//! for skills), so a configuration file is optional and may be partial.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-user configuration file
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Main validator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Directory entries that mark a project root, checked in order
    pub root_markers: Vec<String>,

    /// Memory store directory, relative to the project root
    pub memory_dir: PathBuf,

    /// File extension of memory documents (without the dot)
    pub memory_extension: String,

    /// Plugin directory, relative to the project root
    pub plugins_dir: PathBuf,

    /// Directory inside each plugin that holds skill bundles
    pub skills_subdir: String,

    /// File that declares a skill bundle
    pub skill_descriptor: String,

    /// Substrings that make a backticked path look like project structure
    pub path_markers: Vec<String>,

    /// Maximum characters of the source line kept as context
    pub context_width: usize,

    /// Hint appended to the summary report when stale references exist
    pub remediation_hint: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            root_markers: vec![".serena".to_string(), ".git".to_string()],
            memory_dir: PathBuf::from(".serena").join("memories"),
            memory_extension: "md".to_string(),
            plugins_dir: PathBuf::from("plugins"),
            skills_subdir: "skills".to_string(),
            skill_descriptor: "SKILL.md".to_string(),
            path_markers: default_path_markers(),
            context_width: 100,
            remediation_hint: "*Run `/checkpoint` after fixing to update memories.*".to_string(),
        }
    }
}

/// Markers that identify a backticked token as a project path
pub fn default_path_markers() -> Vec<String> {
    [
        ".md", ".py", ".json", ".sh", ".yaml", ".yml", "SKILL", "AGENT", ".claude", ".serena",
        "plugins/", "scripts/", "hooks/",
    ]
    .iter()
    .map(|m| m.to_string())
    .collect()
}

impl ValidatorConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, the per-user file is used
    /// when present, otherwise the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::user_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "Using user configuration");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Per-user configuration file (`<config dir>/memory-validator/config.toml`)
    pub fn user_config_path() -> Option<PathBuf> {
        dirs_next::config_dir().map(|dir| dir.join("memory-validator").join(CONFIG_FILE_NAME))
    }

    /// Absolute memory store directory for a project root
    pub fn memory_dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.memory_dir)
    }

    /// Absolute plugins directory for a project root
    pub fn plugins_dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.plugins_dir)
    }

    fn check(&self) -> Result<()> {
        if self.root_markers.is_empty() {
            return Err(Error::Config("root_markers must not be empty".to_string()));
        }
        if self.skill_descriptor.is_empty() || self.skill_descriptor.contains('/') {
            return Err(Error::Config(format!(
                "skill_descriptor must be a plain file name, got '{}'",
                self.skill_descriptor
            )));
        }
        if self.memory_extension.starts_with('.') {
            return Err(Error::Config(
                "memory_extension must not start with a dot".to_string(),
            ));
        }
        Ok(())
    }
}
