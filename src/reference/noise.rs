//! Noise filter for candidate references
//!
//! Backticked tokens in free text are often URLs, shell variables, Go import
//! paths or date templates rather than project paths. Each candidate is
//! tested against an ordered rule table; any match drops it before
//! validation.

use crate::error::{Error, Result};
use regex::Regex;

/// Built-in noise rules as `(name, pattern)`, in evaluation order.
/// Patterns are matched case-insensitively.
const NOISE_RULES: &[(&str, &str)] = &[
    ("url", r"^https?://"),
    ("shell_variable", r"^\$"),
    ("slash_command", r"^/\w+$"),
    ("module_host_path", r"^\w+\.\w+\.\w+/"),
    ("hyphenated_package", r"^[a-z]+-[a-z]+/[a-z]"),
    ("package_path", r"^[a-z]+/[a-z]+$"),
    ("google_vendor", r"^google/"),
    ("uber_vendor", r"^uber-go/"),
    ("go_errors", r"^errors\."),
    ("date_template", r"YYYY"),
    ("version_number", r"^\d+\.\d+"),
    ("home_relative", r"^~"),
    ("user_claude_dir", r"^\.claude/"),
    ("mcp_tool", r"^mcp__"),
];

/// The built-in noise rule table
pub fn default_noise_rules() -> &'static [(&'static str, &'static str)] {
    NOISE_RULES
}

struct CompiledNoiseRule {
    name: &'static str,
    pattern: Regex,
}

/// Compiled, ordered noise filter
pub struct NoiseFilter {
    rules: Vec<CompiledNoiseRule>,
}

impl NoiseFilter {
    /// Compile the given rules
    pub fn new(rules: &[(&'static str, &str)]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|&(name, pattern)| {
                let pattern = Regex::new(&format!("(?i){}", pattern)).map_err(|e| {
                    Error::Pattern(format!(
                        "Invalid regex pattern for noise rule '{}': {}",
                        name, e
                    ))
                })?;
                Ok(CompiledNoiseRule { name, pattern })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Compile the built-in rule table
    pub fn with_defaults() -> Result<Self> {
        Self::new(default_noise_rules())
    }

    /// Name of the first rule matching `candidate`, if any
    pub fn matching_rule(&self, candidate: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(candidate))
            .map(|rule| rule.name)
    }
}
