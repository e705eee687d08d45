//! Validation driver
//!
//! Locates the project root, takes a snapshot of skills and memories,
//! validates every document and renders the outcome. Only failures in
//! this orchestration become run-level errors (exit code 2); stale
//! references and unreadable documents are ordinary results.

use crate::config::ValidatorConfig;
use crate::error::{Error, Result};
use crate::memory::{MemoryDocument, MemoryStore};
use crate::reference::{Extractor, StaleReference};
use crate::report::{format_json, format_json_error, format_summary, HookResponse, ValidationReport};
use crate::skills::SkillSet;
use crate::validator::ReferenceValidator;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Find the nearest ancestor of `start` (inclusive) containing a root marker
pub fn find_project_root(start: &Path, markers: &[String]) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| markers.iter().any(|marker| dir.join(marker).exists()))
        .map(Path::to_path_buf)
}

/// Validates the memory store of a project
pub struct MemoryValidator {
    config: ValidatorConfig,
    extractor: Extractor,
}

impl MemoryValidator {
    /// Build a validator, compiling the extraction rules once
    pub fn new(config: ValidatorConfig) -> Result<Self> {
        let extractor = Extractor::new(&config)?;
        Ok(Self { config, extractor })
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Discover the project root from `start` and validate it.
    ///
    /// No project root is not an error: the report is empty and valid.
    pub fn validate_from(&self, start: &Path) -> Result<ValidationReport> {
        match find_project_root(start, &self.config.root_markers) {
            Some(root) => {
                tracing::debug!(root = %root.display(), "Found project root");
                self.validate_project(&root)
            }
            None => {
                tracing::debug!(start = %start.display(), "No project root found");
                Ok(ValidationReport::empty())
            }
        }
    }

    /// Validate every memory document of the project at `root`
    pub fn validate_project(&self, root: &Path) -> Result<ValidationReport> {
        let skills = SkillSet::discover(root, &self.config);
        let memories = MemoryStore::load(
            &self.config.memory_dir_in(root),
            &self.config.memory_extension,
        )?;
        let validator = ReferenceValidator::new(root, &skills, &memories);

        let mut report = ValidationReport::empty();
        for document in memories.documents() {
            report.add_document(self.validate_document(document, &validator));
        }

        tracing::info!(
            total = report.total_memories,
            valid = report.valid_memories,
            stale = report.stale_count(),
            "Memory validation complete"
        );
        Ok(report)
    }

    /// Stale references of one document, in line order
    pub fn validate_document(
        &self,
        document: &MemoryDocument,
        validator: &ReferenceValidator<'_>,
    ) -> Vec<StaleReference> {
        self.extractor
            .extract(document)
            .into_iter()
            .filter(|reference| !validator.is_valid(reference))
            .map(|reference| {
                let line = document.line(reference.line).to_string();
                StaleReference::new(
                    reference,
                    document.identifier.clone(),
                    &line,
                    self.config.context_width,
                )
            })
            .collect()
    }
}

/// How the report is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown summary
    #[default]
    Summary,
    /// Structured JSON
    Json,
    /// Markdown summary wrapped in a session-output hook envelope
    Hook,
}

/// Overall run outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No stale references (including no project / no memories)
    Valid,
    /// At least one stale reference
    Stale,
    /// Run-level failure
    Failed,
}

impl RunOutcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::Valid => 0,
            RunOutcome::Stale => 1,
            RunOutcome::Failed => 2,
        }
    }
}

/// Options for a single run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Output format
    pub format: OutputFormat,
    /// Print nothing when the report is valid
    pub quiet: bool,
    /// Validate this directory instead of discovering the root
    pub root: Option<PathBuf>,
    /// Directory to start root discovery from (defaults to the working directory)
    pub start_dir: Option<PathBuf>,
    /// Explicit configuration file
    pub config_path: Option<PathBuf>,
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub outcome: RunOutcome,
    /// Text for standard output
    pub stdout: Option<String>,
    /// Text for standard error
    pub stderr: Option<String>,
}

impl RunResult {
    /// Write the run's output and return the process exit code.
    ///
    /// Failing to write the report is a run-level failure: the error goes to
    /// `stderr` and the exit code is that of [`RunOutcome::Failed`].
    pub fn emit(&self, stdout: &mut impl Write, stderr: &mut impl Write) -> u8 {
        match self.write_streams(stdout, stderr) {
            Ok(()) => self.outcome.exit_code(),
            Err(e) => {
                tracing::debug!("Failed to write report: {}", e);
                let _ = writeln!(stderr, "Error: {}", e);
                RunOutcome::Failed.exit_code()
            }
        }
    }

    fn write_streams(&self, stdout: &mut impl Write, stderr: &mut impl Write) -> std::io::Result<()> {
        if let Some(text) = &self.stdout {
            writeln!(stdout, "{}", text)?;
            stdout.flush()?;
        }
        if let Some(text) = &self.stderr {
            writeln!(stderr, "{}", text)?;
        }
        Ok(())
    }
}

/// Execute one validation run. Never panics on I/O or configuration
/// problems; those become [`RunOutcome::Failed`].
pub fn run(options: &RunOptions) -> RunResult {
    match execute(options) {
        Ok((report, stdout)) => RunResult {
            outcome: if report.is_valid() {
                RunOutcome::Valid
            } else {
                RunOutcome::Stale
            },
            stdout,
            stderr: None,
        },
        Err(e) => {
            tracing::debug!("Memory validation failed: {}", e);
            let message = e.to_string();
            let (stdout, stderr) = match options.format {
                OutputFormat::Json => (Some(format_json_error(&message)), None),
                _ => (None, Some(format!("Error: {}", message))),
            };
            RunResult {
                outcome: RunOutcome::Failed,
                stdout,
                stderr,
            }
        }
    }
}

fn execute(options: &RunOptions) -> Result<(ValidationReport, Option<String>)> {
    let config = ValidatorConfig::resolve(options.config_path.as_deref())?;
    let validator = MemoryValidator::new(config)?;

    let report = match &options.root {
        Some(root) => {
            if !root.is_dir() {
                return Err(Error::Config(format!(
                    "Project root {} is not a directory",
                    root.display()
                )));
            }
            validator.validate_project(root)?
        }
        None => {
            let start = match &options.start_dir {
                Some(dir) => dir.clone(),
                None => std::env::current_dir()?,
            };
            validator.validate_from(&start)?
        }
    };

    if options.quiet && report.is_valid() {
        return Ok((report, None));
    }

    let output = render(&report, options.format, &validator.config().remediation_hint)?;
    Ok((report, output))
}

/// Render a report in the requested format; `None` means print nothing
pub fn render(
    report: &ValidationReport,
    format: OutputFormat,
    remediation_hint: &str,
) -> Result<Option<String>> {
    let output = match format {
        OutputFormat::Json => Some(format_json(report)?),
        OutputFormat::Summary => {
            Some(format_summary(report, remediation_hint)).filter(|s| !s.is_empty())
        }
        OutputFormat::Hook => {
            HookResponse::session_output(format_summary(report, remediation_hint)).render()
        }
    };
    Ok(output)
}
