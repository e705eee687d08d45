//! Reference extraction
//!
//! Turns memory document text into typed [`Reference`] candidates:
//! - [`types`]: the reference data model
//! - [`noise`]: ordered filter for tokens that only look like paths
//! - [`extractor`]: fence-aware, rule-table driven line scanner

pub mod extractor;
pub mod noise;
pub mod types;

pub use extractor::{Extractor, FENCE_MARKER};
pub use noise::{default_noise_rules, NoiseFilter};
pub use types::{Reference, ReferenceKind, StaleReference};
