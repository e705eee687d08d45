//! Memory Validator - detect stale references in project memories
//!
//! Exit codes: 0 when every memory is valid (or there is nothing to check),
//! 1 when stale references were found, 2 when the run itself failed.

use anyhow::Result;
use clap::Parser;
use memory_validator::{run, OutputFormat, RunOptions, RunOutcome};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "memory-validator")]
#[command(author = "A3S Lab Team")]
#[command(version)]
#[command(about = "Validate that project memories only reference files, skills and memories that still exist")]
struct Cli {
    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Only output if issues found
    #[arg(short, long)]
    quiet: bool,

    /// Wrap the summary in a session hook envelope (ignored with --json)
    #[arg(long)]
    hook: bool,

    /// Project root (skips discovery from the working directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "MEMORY_VALIDATOR_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(RunOutcome::Failed.exit_code());
    }

    let format = if cli.json {
        OutputFormat::Json
    } else if cli.hook {
        OutputFormat::Hook
    } else {
        OutputFormat::Summary
    };

    let result = run(&RunOptions {
        format,
        quiet: cli.quiet,
        root: cli.root,
        start_dir: None,
        config_path: cli.config,
    });

    let code = result.emit(&mut std::io::stdout().lock(), &mut std::io::stderr().lock());
    ExitCode::from(code)
}

/// Logs go to stderr; stdout is reserved for the report.
fn init_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("memory_validator={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}
