//! Command implementation for the ULD manifest processor CLI
//!
//! This module wires the CLI to the library: logging setup, resolving the
//! manifest path, running the batch and printing the report.

use crate::app::services::batch_processor::{BatchProcessor, BatchStats};
use crate::app::services::load_plan::LoadPlan;
use crate::app::services::report_formatter::write_report;
use crate::cli::args::Args;
use crate::config::{ReportFormat, RunConfig};
use crate::constants::{INPUT_PROMPT, LOG_TARGET};
use anyhow::{Context, Result, bail};
use colored::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Batch statistics for the lines that were processed
    pub stats: BatchStats,
    /// False when the manifest could not be read to the end
    pub source_complete: bool,
}

/// Main command runner
///
/// 1. Set up logging and validate arguments
/// 2. Resolve the manifest path (argument or prompt)
/// 3. Process the manifest, printing rejections as they occur
/// 4. Print the load report
pub fn run(args: Args) -> Result<RunOutcome> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let config = args.to_run_config()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    execute(&config, stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
}

/// Run a manifest batch against explicit I/O streams
///
/// The report goes to `out` and the optional summary to `err`. The path
/// prompt and rejection diagnostics go to `out` for the text report and to
/// `err` for the JSON report. If the manifest becomes unreadable, the failure is printed once and
/// the report still covers every record accepted before it.
pub fn execute<R: BufRead, W: Write, E: Write>(
    config: &RunConfig,
    input: R,
    out: &mut W,
    err: &mut E,
) -> Result<RunOutcome> {
    let path = match (&config.input_path, config.report_format) {
        (Some(path), _) => path.clone(),
        (None, ReportFormat::Human) => prompt_for_path(input, out)?,
        (None, ReportFormat::Json) => prompt_for_path(input, err)?,
    };

    info!("Loading manifest from {}", path.display());

    // Stdout carries only the JSON document, so diagnostics go to stderr
    let mut processor = BatchProcessor::new();
    let source_complete = match config.report_format {
        ReportFormat::Human => run_batch(&mut processor, &path, out)?,
        ReportFormat::Json => run_batch(&mut processor, &path, err)?,
    };

    let (plan, stats) = processor.into_parts();
    write_report(out, &plan, &stats, config.report_format)?;
    out.flush().context("Failed to flush report")?;

    if config.show_summary {
        print_summary(err, &plan, &stats)?;
    }

    Ok(RunOutcome {
        stats,
        source_complete,
    })
}

/// Process the manifest, writing rejections and any read failure to `diagnostics`
///
/// Returns false when the manifest could not be read to the end.
fn run_batch<D: Write>(
    processor: &mut BatchProcessor,
    path: &Path,
    diagnostics: &mut D,
) -> Result<bool> {
    match processor.process_file(path, diagnostics) {
        Ok(()) => Ok(true),
        Err(e) if e.is_source_failure() => {
            writeln!(diagnostics, "{}", e).context("Failed to write error message")?;
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Ask for the manifest file name and read it from `input`
pub fn prompt_for_path<R: BufRead, W: Write>(mut input: R, out: &mut W) -> Result<PathBuf> {
    writeln!(out, "\n{}", INPUT_PROMPT).context("Failed to write prompt")?;
    out.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read manifest file name")?;

    let name = line.trim();
    if name.is_empty() {
        bail!("No manifest file name given");
    }

    Ok(PathBuf::from(name))
}

/// Print the batch summary
fn print_summary<E: Write>(err: &mut E, plan: &LoadPlan, stats: &BatchStats) -> Result<()> {
    writeln!(err, "\n{}", "Manifest Summary".bright_green().bold())?;
    writeln!(
        err,
        "  {} {}",
        "Lines read:".bright_white(),
        stats.lines_read
    )?;
    writeln!(
        err,
        "  {} {}",
        "Accepted:".bright_green(),
        stats.accepted.to_string().bold()
    )?;
    writeln!(
        err,
        "  {} {} (parse: {}, rules: {}, capacity: {})",
        "Rejected:".bright_red(),
        stats.rejected.to_string().bold(),
        stats.parse_failures,
        stats.validation_failures,
        stats.capacity_failures
    )?;
    writeln!(err, "  {} {}", "Skipped:".bright_yellow(), stats.skipped)?;

    for load in plan.loads() {
        let ledger = load.ledger();
        writeln!(
            err,
            "  {} {:.1} / {:.1} ({:.1}%)",
            format!("{} load:", load.aircraft_type()).bright_cyan(),
            ledger.current_total(),
            ledger.max_load(),
            ledger.utilization()
        )?;
    }

    Ok(())
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(io::stderr),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("manifest.txt");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_prompt_for_path() {
        let mut out: Vec<u8> = Vec::new();
        let path = prompt_for_path("  cargo.txt  \n".as_bytes(), &mut out).unwrap();

        assert_eq!(path, PathBuf::from("cargo.txt"));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nPlease enter the name of your data file:\n"
        );
    }

    #[test]
    fn test_prompt_rejects_empty_answer() {
        let mut out: Vec<u8> = Vec::new();
        assert!(prompt_for_path("\n".as_bytes(), &mut out).is_err());
        assert!(prompt_for_path("".as_bytes(), &mut out).is_err());
    }

    #[test]
    fn test_execute_prints_diagnostics_then_report() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            "Container AYF ULD001 737 5000.0 LAX\nBox AYF ULD004 737 1000.0 LAX\n",
        );

        let config = RunConfig::new(Some(path));
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let outcome = execute(&config, io::empty(), &mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(outcome.source_complete);
        assert_eq!(outcome.stats.accepted, 1);
        assert!(out.starts_with("Box not Container or Pallet, rejected load.\n"));
        assert!(out.contains("Load out of 737 aircraft IBA0123"));
        assert!(out.contains("ULD001"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_execute_uses_prompted_path() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, "Pallet AKE ULD002 767 50000.0 JFK\n");
        let answer = format!("{}\n", path.display());

        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let outcome =
            execute(&RunConfig::default(), answer.as_bytes(), &mut out, &mut err).unwrap();

        assert_eq!(outcome.stats.accepted, 1);
        assert!(String::from_utf8(out).unwrap().contains("ULD002"));
    }

    #[test]
    fn test_execute_missing_file_reports_once_and_prints_empty_report() {
        let dir = TempDir::new().unwrap();
        let config = RunConfig::new(Some(dir.path().join("absent.txt")));

        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let outcome = execute(&config, io::empty(), &mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(!outcome.source_complete);
        assert_eq!(out.matches("Error reading file:").count(), 1);
        assert!(out.contains("Load out of 737 aircraft IBA0123"));
        assert!(out.contains("Load out of 767 aircraft IBA0456"));
    }

    #[test]
    fn test_execute_json_with_summary() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, "Container AYF ULD001 737 5000.0 LAX\n");

        let config = RunConfig {
            input_path: Some(path),
            report_format: ReportFormat::Json,
            show_summary: true,
        };
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        execute(&config, io::empty(), &mut out, &mut err).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["stats"]["accepted"], 1);
        assert!(String::from_utf8(err).unwrap().contains("Manifest Summary"));
    }

    #[test]
    fn test_execute_json_sends_diagnostics_to_stderr() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            "Container AYF ULD001 737 5000.0 LAX
Box AYF ULD004 737 1000.0 LAX
",
        );

        let config = RunConfig {
            input_path: Some(path),
            report_format: ReportFormat::Json,
            show_summary: false,
        };
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let outcome = execute(&config, io::empty(), &mut out, &mut err).unwrap();

        // The whole of stdout is one JSON document
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(outcome.source_complete);
        assert_eq!(value["stats"]["rejected"], 1);
        assert_eq!(
            value["stats"]["rejection_messages"][0],
            "Box not Container or Pallet, rejected load."
        );
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Box not Container or Pallet, rejected load.\n"
        );
    }

    #[test]
    fn test_execute_json_prompts_on_stderr() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, "Pallet AKE ULD002 767 50000.0 JFK\n");
        let answer = format!("{}\n", path.display());

        let config = RunConfig {
            input_path: None,
            report_format: ReportFormat::Json,
            show_summary: false,
        };
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        execute(&config, answer.as_bytes(), &mut out, &mut err).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["aircraft"][1]["records"][0]["uld_id"], "ULD002");
        assert!(
            String::from_utf8(err)
                .unwrap()
                .contains("Please enter the name of your data file:")
        );
    }

    #[test]
    fn test_execute_json_missing_file_keeps_stdout_valid() {
        let dir = TempDir::new().unwrap();
        let config = RunConfig {
            input_path: Some(dir.path().join("absent.txt")),
            report_format: ReportFormat::Json,
            show_summary: false,
        };

        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let outcome = execute(&config, io::empty(), &mut out, &mut err).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(!outcome.source_complete);
        assert_eq!(value["stats"]["lines_read"], 0);
        assert_eq!(
            String::from_utf8(err)
                .unwrap()
                .matches("Error reading file:")
                .count(),
            1
        );
    }
}
