//! Memory Validator - stale reference detection for project memories
//!
//! Memories are free-form markdown notes kept in a project's memory store
//! (`.serena/memories` by default). They tend to mention project files,
//! skills and other memories, and those mentions rot as the project moves
//! on. The validator scans every memory, extracts the references and checks
//! each one against the live project.
//!
//! ## Architecture
//!
//! ```text
//!          ┌──────────────────────┐
//!          │  find_project_root   │  walk up to .serena / .git
//!          └──────────┬───────────┘
//!           ┌─────────┴──────────┐
//!  ┌────────▼────────┐  ┌────────▼────────┐
//!  │    SkillSet     │  │   MemoryStore   │  plugins/*/skills/*/SKILL.md,
//!  │   (discover)    │  │     (load)      │  .serena/memories/*.md
//!  └────────┬────────┘  └────────┬────────┘
//!           │      ┌─────────────▼─────────────┐
//!           │      │         Extractor          │  fence-aware rule table,
//!           │      │  path / skill / memory     │  noise filter
//!           │      └─────────────┬─────────────┘
//!  ┌────────▼────────────────────▼────────────┐
//!  │            ReferenceValidator             │  skills, memory listing,
//!  └────────────────────┬─────────────────────┘  filesystem
//!             ┌─────────▼─────────┐
//!             │  ValidationReport │  summary / JSON / hook envelope
//!             └───────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`driver`]: root discovery, orchestration and run outcome
//! - [`skills`]: skill discovery
//! - [`memory`]: memory store loading
//! - [`reference`]: reference model, noise filter and extractor
//! - [`validator`]: per-reference resolution
//! - [`report`]: aggregation and rendering
//! - [`config`]: configuration management

pub mod config;
pub mod driver;
pub mod error;
pub mod memory;
pub mod reference;
pub mod report;
pub mod skills;
pub mod validator;

pub use config::ValidatorConfig;
pub use driver::{
    find_project_root, run, MemoryValidator, OutputFormat, RunOptions, RunOutcome, RunResult,
};
pub use error::{Error, Result};
pub use report::ValidationReport;
