//! Report rendering
//!
//! Summary mode is markdown meant for a human (or an agent's session
//! context). Structured mode is pretty-printed JSON with a fixed key order.

use super::types::ValidationReport;
use crate::error::Result;
use crate::reference::StaleReference;

/// Render the human-readable summary.
///
/// Empty when there is nothing to report (no memories at all).
pub fn format_summary(report: &ValidationReport, remediation_hint: &str) -> String {
    if report.is_valid() {
        if report.total_memories == 0 {
            return String::new();
        }
        return format!("✓ All {} memories are valid", report.total_memories);
    }

    let mut lines = vec![
        format!(
            "## ⚠️ Memory Validation: {} stale reference(s)",
            report.stale_count()
        ),
        String::new(),
    ];

    for (file, refs) in group_by_document(&report.stale_references) {
        lines.push(format!("**{}:**", file));
        for stale in refs {
            lines.push(format!(
                "  - Line {}: `{}` ({})",
                stale.reference.line, stale.reference.text, stale.reference.kind
            ));
        }
        lines.push(String::new());
    }

    lines.push(remediation_hint.to_string());
    lines.join("\n")
}

/// Render the structured report as pretty JSON
pub fn format_json(report: &ValidationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&report.to_structured())?)
}

/// Render a run-level error for structured consumers
pub fn format_json_error(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Group stale references by source document, in first-appearance order
fn group_by_document(stale: &[StaleReference]) -> Vec<(&str, Vec<&StaleReference>)> {
    let mut groups: Vec<(&str, Vec<&StaleReference>)> = Vec::new();
    for entry in stale {
        match groups
            .iter_mut()
            .find(|(file, _)| *file == entry.source_document)
        {
            Some((_, refs)) => refs.push(entry),
            None => groups.push((entry.source_document.as_str(), vec![entry])),
        }
    }
    groups
}
