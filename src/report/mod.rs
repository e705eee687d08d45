//! Validation reports
//!
//! - [`types`]: aggregated results and the structured report shape
//! - [`format`]: summary and JSON rendering
//! - [`hook`]: JSON envelopes for running as an agent hook

pub mod format;
pub mod hook;
pub mod types;

pub use format::{format_json, format_json_error, format_summary};
pub use hook::HookResponse;
pub use types::{StructuredReport, StructuredStale, ValidationReport};
