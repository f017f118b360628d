//! Main batch processor implementation and per-line orchestration
//!
//! This module contains the BatchProcessor struct, which owns the load plan
//! (ledger and registry per aircraft) for one manifest and moves each line
//! through parsing, validation and capacity reservation.

use crate::app::models::{AircraftType, CargoRecord};
use crate::app::services::load_plan::LoadPlan;
use crate::app::services::manifest_parser::{RawRecord, parse_line};
use crate::app::services::validation::{RecordError, validate};
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info, warn};

use super::stats::BatchStats;

/// Terminal state of one manifest line
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Record registered on its aircraft
    Accepted {
        sequence: u64,
        aircraft_type: AircraftType,
    },
    /// Wrong field count; dropped without a diagnostic
    Skipped,
    /// Record failed parsing, a rule check or the capacity check
    Rejected { sequence: u64, error: RecordError },
}

/// Processor for a single manifest batch
///
/// Owns one capacity ledger and one cargo registry per aircraft type for the
/// lifetime of the batch. Lines are handled strictly one at a time.
#[derive(Debug, Default)]
pub struct BatchProcessor {
    plan: LoadPlan,
    stats: BatchStats,
    /// Counts well-formed lines; only used for diagnostics
    sequence: u64,
}

impl BatchProcessor {
    /// Create a processor with empty ledgers and registries
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a single manifest line through the pipeline
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        self.stats.lines_read += 1;

        let Some(parsed) = parse_line(line).transpose() else {
            self.stats.skipped += 1;
            return LineOutcome::Skipped;
        };

        self.sequence += 1;
        let sequence = self.sequence;

        match parsed.and_then(|raw| self.admit(raw)) {
            Ok(aircraft_type) => {
                self.stats.accepted += 1;
                debug!("Unit #{} accepted onto {}", sequence, aircraft_type);
                LineOutcome::Accepted {
                    sequence,
                    aircraft_type,
                }
            }
            Err(error) => {
                self.stats.add_rejection(&error);
                debug!("Unit #{} rejected: {}", sequence, error);
                LineOutcome::Rejected { sequence, error }
            }
        }
    }

    /// Validate a parsed record and load it onto its aircraft
    fn admit(&mut self, raw: RawRecord) -> std::result::Result<AircraftType, RecordError> {
        let (uld_type, aircraft_type) = validate(&raw)?;

        let record = CargoRecord::new(
            uld_type,
            raw.abbreviation,
            raw.uld_id,
            aircraft_type,
            raw.weight,
            raw.destination,
        );
        self.plan.accept(record)?;

        Ok(aircraft_type)
    }

    /// Process every line of a manifest source
    ///
    /// Each rejection's diagnostic is written to `diagnostics` as soon as the
    /// line is handled. Lines that are not valid UTF-8 are decoded lossily. A
    /// read failure stops the batch with [`Error::SourceUnreadable`]; records
    /// accepted before the failure stay in the load plan.
    pub fn process_reader<R: BufRead, W: Write>(
        &mut self,
        mut reader: R,
        source_name: &str,
        diagnostics: &mut W,
    ) -> Result<()> {
        info!("Processing manifest {}", source_name);

        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            let bytes_read = reader.read_until(b'\n', &mut buffer).map_err(|e| {
                warn!(
                    "Manifest {} became unreadable after {} lines",
                    source_name, self.stats.lines_read
                );
                Error::source_unreadable(source_name, e)
            })?;

            if bytes_read == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buffer);
            if let LineOutcome::Rejected { error, .. } = self.process_line(&line) {
                writeln!(diagnostics, "{}", error)
                    .map_err(|e| Error::io("Failed to write diagnostic", e))?;
            }
        }

        info!("{}", self.stats.summary());
        Ok(())
    }

    /// Open a manifest file and process it
    pub fn process_file<W: Write>(&mut self, path: &Path, diagnostics: &mut W) -> Result<()> {
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|e| {
            warn!("Cannot open manifest {}: {}", source_name, e);
            Error::source_unreadable(source_name.clone(), e)
        })?;

        self.process_reader(BufReader::new(file), &source_name, diagnostics)
    }

    /// Ledgers and registries built so far
    pub fn load_plan(&self) -> &LoadPlan {
        &self.plan
    }

    pub fn stats(&self) -> &BatchStats {
        &self.stats
    }

    /// Number of well-formed lines seen so far
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Consume the processor, returning the load plan and statistics
    pub fn into_parts(self) -> (LoadPlan, BatchStats) {
        (self.plan, self.stats)
    }
}
