//! Hook response envelopes
//!
//! Agent hooks talk to their host by printing a single JSON object on
//! stdout. [`HookResponse`] is the one place that shape is defined, so the
//! validator and any sibling hook render it the same way.

use serde_json::json;

/// Default event name for permission decisions
pub const DEFAULT_HOOK_EVENT: &str = "PreToolUse";

/// A response a hook can emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookResponse {
    /// Context injected at session start
    SessionOutput { output: String },
    /// Deny the pending action
    Block { reason: String, event: String },
    /// Ask the user before the pending action
    Ask { reason: String, event: String },
    /// Allow silently
    Allow,
}

impl HookResponse {
    pub fn session_output(output: impl Into<String>) -> Self {
        Self::SessionOutput {
            output: output.into(),
        }
    }

    pub fn block(reason: impl Into<String>) -> Self {
        Self::Block {
            reason: reason.into(),
            event: DEFAULT_HOOK_EVENT.to_string(),
        }
    }

    pub fn ask(reason: impl Into<String>) -> Self {
        Self::Ask {
            reason: reason.into(),
            event: DEFAULT_HOOK_EVENT.to_string(),
        }
    }

    /// JSON payload to print, or `None` when the hook stays silent
    pub fn render(&self) -> Option<String> {
        let value = match self {
            Self::SessionOutput { output } if output.is_empty() => return None,
            Self::SessionOutput { output } => json!({ "output": output }),
            Self::Block { reason, event } => permission_decision(event, "block", reason),
            Self::Ask { reason, event } => permission_decision(event, "ask", reason),
            Self::Allow => return None,
        };
        Some(value.to_string())
    }
}

fn permission_decision(event: &str, decision: &str, reason: &str) -> serde_json::Value {
    json!({
        "hookSpecificOutput": {
            "hookEventName": event,
            "permissionDecision": decision,
            "permissionDecisionReason": reason,
        }
    })
}
