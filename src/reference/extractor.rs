//! Rule-based extraction of references from memory documents
//!
//! Extraction is line-oriented and deterministic. Lines inside fenced code
//! blocks are skipped. Every other line is run through each rule in
//! declaration order, and all rules contribute:
//!
//! 1. Backticked path-like tokens that carry a project-structure marker (`path`)
//! 2. Markdown links of the form `[name](./name)` (`skill`)
//! 3. Backticked `name/SKILL.md` mentions (`skill`)
//! 4. `read_memory('name')` calls (`memory`)
//!
//! Path and memory candidates pass through the [`NoiseFilter`] first.

use super::noise::NoiseFilter;
use super::types::{Reference, ReferenceKind};
use crate::config::ValidatorConfig;
use crate::error::{Error, Result};
use crate::memory::MemoryDocument;
use regex::Regex;

/// Marker that opens and closes a fenced code block
pub const FENCE_MARKER: &str = "```";

const PATH_PATTERN: &str = r"`(\.?\.?/?[a-zA-Z_][a-zA-Z0-9_-]*(?:/[a-zA-Z0-9_.-]+)+)`";
const SKILL_LINK_PATTERN: &str = r"\[([a-z][a-z0-9-]*)\]\(\./([a-z][a-z0-9-]*)\)";
const MEMORY_CALL_PATTERN: &str = r#"read_memory\(['"]([^'"]+)['"]\)"#;

struct ExtractionRule {
    name: &'static str,
    pattern: Regex,
    kind: ReferenceKind,
    /// Capture group holding the reference text
    group: usize,
    noise_filtered: bool,
    needs_path_marker: bool,
}

/// Compiled reference extractor
pub struct Extractor {
    rules: Vec<ExtractionRule>,
    noise: NoiseFilter,
    path_markers: Vec<String>,
}

impl Extractor {
    /// Build an extractor for the given configuration
    pub fn new(config: &ValidatorConfig) -> Result<Self> {
        let skill_mention = format!(
            r"`([a-z][a-z0-9-]+)/{}`",
            regex::escape(&config.skill_descriptor)
        );

        let rules = vec![
            compile("path", PATH_PATTERN, ReferenceKind::Path, 1, true, true)?,
            compile("skill_link", SKILL_LINK_PATTERN, ReferenceKind::Skill, 2, false, false)?,
            compile("skill_mention", &skill_mention, ReferenceKind::Skill, 1, false, false)?,
            compile("memory_call", MEMORY_CALL_PATTERN, ReferenceKind::Memory, 1, true, false)?,
        ];

        Ok(Self {
            rules,
            noise: NoiseFilter::with_defaults()?,
            path_markers: config.path_markers.clone(),
        })
    }

    /// Extract references from a loaded memory document
    pub fn extract(&self, document: &MemoryDocument) -> Vec<Reference> {
        self.extract_lines(document.lines.iter().map(String::as_str))
    }

    /// Extract references from raw document text
    pub fn extract_text(&self, content: &str) -> Vec<Reference> {
        self.extract_lines(content.split('\n'))
    }

    fn extract_lines<'a>(&self, lines: impl Iterator<Item = &'a str>) -> Vec<Reference> {
        let mut refs = Vec::new();
        let mut in_fence = false;

        for (index, line) in lines.enumerate() {
            if line.trim().starts_with(FENCE_MARKER) {
                in_fence = !in_fence;
                continue;
            }
            if in_fence {
                continue;
            }
            self.extract_line(line, index + 1, &mut refs);
        }

        refs
    }

    fn extract_line(&self, line: &str, line_number: usize, refs: &mut Vec<Reference>) {
        for rule in &self.rules {
            for caps in rule.pattern.captures_iter(line) {
                let Some(text) = caps.get(rule.group).map(|m| m.as_str()) else {
                    continue;
                };

                if rule.noise_filtered {
                    if let Some(noise) = self.noise.matching_rule(text) {
                        tracing::debug!(
                            candidate = text,
                            rule = rule.name,
                            noise,
                            line = line_number,
                            "Dropped noise candidate"
                        );
                        continue;
                    }
                }

                if rule.needs_path_marker && !self.has_path_marker(text) {
                    continue;
                }

                refs.push(Reference::new(text, rule.kind, line_number));
            }
        }
    }

    fn has_path_marker(&self, text: &str) -> bool {
        self.path_markers.iter().any(|marker| text.contains(marker.as_str()))
    }
}

fn compile(
    name: &'static str,
    pattern: &str,
    kind: ReferenceKind,
    group: usize,
    noise_filtered: bool,
    needs_path_marker: bool,
) -> Result<ExtractionRule> {
    let pattern = Regex::new(pattern).map_err(|e| {
        Error::Pattern(format!("Invalid regex pattern for rule '{}': {}", name, e))
    })?;
    Ok(ExtractionRule {
        name,
        pattern,
        kind,
        group,
        noise_filtered,
        needs_path_marker,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> Extractor {
        Extractor::new(&ValidatorConfig::default()).unwrap()
    }

    fn kinds(refs: &[Reference]) -> Vec<(&str, ReferenceKind)> {
        refs.iter().map(|r| (r.text.as_str(), r.kind)).collect()
    }

    #[test]
    fn test_extract_backticked_path() {
        let refs = extractor().extract_text("See `plugins/core/skills/testing/SKILL.md` for details");
        assert_eq!(
            kinds(&refs),
            vec![("plugins/core/skills/testing/SKILL.md", ReferenceKind::Path)]
        );
        assert_eq!(refs[0].line, 1);
    }

    #[test]
    fn test_path_without_marker_dropped() {
        let refs = extractor().extract_text("Use `src/lib/thing` and `foo/bar/baz`");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_path_requires_backticks() {
        let refs = extractor().extract_text("plain docs/guide.md mention");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_relative_prefixes() {
        let refs = extractor().extract_text("`./scripts/run.sh` and `../shared/notes.md`");
        assert_eq!(
            kinds(&refs),
            vec![
                ("./scripts/run.sh", ReferenceKind::Path),
                ("../shared/notes.md", ReferenceKind::Path),
            ]
        );
    }

    #[test]
    fn test_url_never_a_path() {
        let refs = extractor().extract_text("Upstream: `https://github.com/foo/bar` and https://github.com/foo/bar");
        assert!(refs.iter().all(|r| r.kind != ReferenceKind::Path));
    }

    #[test]
    fn test_noise_paths_dropped() {
        let refs = extractor().extract_text(
            "`checkpoint-YYYY-MM-DD.md` `.claude/settings.json` `github.com/x/y.md` `go-resty/resty.md`",
        );
        assert!(refs.is_empty(), "unexpected refs: {:?}", refs);
    }

    #[test]
    fn test_skill_link() {
        let refs = extractor().extract_text("Use [foo](./foo) here");
        assert_eq!(kinds(&refs), vec![("foo", ReferenceKind::Skill)]);
    }

    #[test]
    fn test_skill_link_target_is_candidate() {
        let refs = extractor().extract_text("[shown-name](./real-target)");
        assert_eq!(kinds(&refs), vec![("real-target", ReferenceKind::Skill)]);
    }

    #[test]
    fn test_skill_link_requires_slugs() {
        let refs = extractor().extract_text("[Foo](./foo) [foo](./Foo) [foo](foo)");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_skill_mention() {
        // The path form is dropped as a hyphenated package path; only the skill remains.
        let refs = extractor().extract_text("Read `beads-workflow/SKILL.md` first");
        assert_eq!(kinds(&refs), vec![("beads-workflow", ReferenceKind::Skill)]);
    }

    #[test]
    fn test_skill_mention_also_tagged_as_path() {
        let refs = extractor().extract_text("Read `testing/SKILL.md` first");
        assert_eq!(
            kinds(&refs),
            vec![
                ("testing/SKILL.md", ReferenceKind::Path),
                ("testing", ReferenceKind::Skill),
            ]
        );
    }

    #[test]
    fn test_memory_call() {
        let refs = extractor().extract_text(
            r#"Call read_memory('old-checkpoint.md') or read_memory("arch.md")"#,
        );
        assert_eq!(
            kinds(&refs),
            vec![
                ("old-checkpoint.md", ReferenceKind::Memory),
                ("arch.md", ReferenceKind::Memory),
            ]
        );
    }

    #[test]
    fn test_memory_call_noise_filtered() {
        let refs = extractor().extract_text("read_memory('checkpoint-YYYY-MM-DD.md')");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_fenced_block_excluded() {
        let content = "\
before `docs/a.md`
```bash
cat `docs/b.md`
read_memory('inside.md')
```
after [foo](./foo)";
        let refs = extractor().extract_text(content);
        assert_eq!(
            refs,
            vec![
                Reference::new("docs/a.md", ReferenceKind::Path, 1),
                Reference::new("foo", ReferenceKind::Skill, 6),
            ]
        );
    }

    #[test]
    fn test_indented_fence_toggles() {
        let content = "  ```\n`docs/a.md`\n  ```\n`docs/b.md`";
        let refs = extractor().extract_text(content);
        assert_eq!(refs, vec![Reference::new("docs/b.md", ReferenceKind::Path, 4)]);
    }

    #[test]
    fn test_unclosed_fence_swallows_rest() {
        let refs = extractor().extract_text("```\n`docs/a.md`\n`docs/b.md`");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_rule_order_within_line() {
        let refs = extractor().extract_text(
            "read_memory('m.md') [x](./x) `hooks/run.py` `y/SKILL.md`",
        );
        let order: Vec<ReferenceKind> = refs.iter().map(|r| r.kind).collect();
        assert_eq!(
            order,
            vec![
                ReferenceKind::Path,
                ReferenceKind::Path,
                ReferenceKind::Skill,
                ReferenceKind::Skill,
                ReferenceKind::Memory,
            ]
        );
    }

    #[test]
    fn test_crlf_lines() {
        let refs = extractor().extract_text("```\r\n`docs/a.md`\r\n```\r\n`docs/b.md`\r\n");
        assert_eq!(refs, vec![Reference::new("docs/b.md", ReferenceKind::Path, 4)]);
    }

    #[test]
    fn test_custom_descriptor() {
        let config = ValidatorConfig {
            skill_descriptor: "AGENT.md".to_string(),
            ..Default::default()
        };
        let refs = Extractor::new(&config).unwrap().extract_text("`planner/AGENT.md`");
        assert!(refs
            .iter()
            .any(|r| r.kind == ReferenceKind::Skill && r.text == "planner"));
    }
}
