//! Command-line argument definitions for the ULD manifest processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::{ReportFormat, RunConfig};
use crate::{Error, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the ULD manifest processor
///
/// Validates a cargo load manifest against Boeing 737/767 compatibility and
/// weight rules and prints the resulting load report.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "uld-manifest",
    version,
    about = "Validate a ULD cargo manifest and print the load report per aircraft",
    long_about = "Reads a manifest with one ULD per line:\n\n  \
                  <Container|Pallet> <abbreviation> <ULD id> <737|767> <weight> <destination>\n\n\
                  Each ULD is checked for type, aircraft and abbreviation compatibility, then \
                  loaded if the aircraft's maximum load allows it (46000 for the 737, 116000 \
                  for the 767). Rejected ULDs are reported as they are read; lines without \
                  exactly six fields are ignored."
)]
pub struct Args {
    /// Manifest file to process
    ///
    /// If not specified, the file name is read from standard input after a prompt.
    #[arg(value_name = "MANIFEST")]
    pub input_path: Option<PathBuf>,

    /// Output format for the load report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the load report"
    )]
    pub output_format: OutputFormat,

    /// Print batch statistics after the report
    #[arg(
        short = 's',
        long = "summary",
        help = "Print accepted/rejected/skipped counts to stderr"
    )]
    pub summary: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress logging except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for the load report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Column-aligned text report
    Human,
    /// JSON format for scripting
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => ReportFormat::Human,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

impl Args {
    /// Validate the arguments and build the run configuration
    pub fn to_run_config(&self) -> Result<RunConfig> {
        if self.quiet && self.summary {
            return Err(Error::configuration(
                "--summary cannot be combined with --quiet",
            ));
        }

        let config = RunConfig {
            input_path: self.input_path.clone(),
            report_format: self.output_format.into(),
            show_summary: self.summary,
        };
        config.validate()?;
        Ok(config)
    }

    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
