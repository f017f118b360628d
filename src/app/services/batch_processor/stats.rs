//! Statistics for manifest batch processing

use crate::app::services::validation::RecordError;
use serde::Serialize;

/// Counters for one manifest batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchStats {
    /// Total number of lines read from the manifest
    pub lines_read: usize,
    /// Lines dropped for having the wrong field count
    pub skipped: usize,
    /// Records added to a registry
    pub accepted: usize,
    /// Records rejected for any reason
    pub rejected: usize,
    /// Rejections caused by unparseable or out-of-range numeric fields
    pub parse_failures: usize,
    /// Rejections caused by ULD type, aircraft type or compatibility rules
    pub validation_failures: usize,
    /// Rejections caused by the capacity ledger
    pub capacity_failures: usize,
    /// Diagnostic text of every rejection, in input order
    ///
    /// Held for the whole batch and serialized with the JSON report; grows
    /// with the number of rejected lines.
    pub rejection_messages: Vec<String>,
}

impl BatchStats {
    /// Create new empty batch statistics
    pub fn new() -> Self {
        Self {
            lines_read: 0,
            skipped: 0,
            accepted: 0,
            rejected: 0,
            parse_failures: 0,
            validation_failures: 0,
            capacity_failures: 0,
            rejection_messages: Vec::new(),
        }
    }

    /// Record a rejection under its category
    pub fn add_rejection(&mut self, error: &RecordError) {
        self.rejected += 1;
        if error.is_capacity_failure() {
            self.capacity_failures += 1;
        } else if error.is_validation_failure() {
            self.validation_failures += 1;
        } else {
            self.parse_failures += 1;
        }
        self.rejection_messages.push(error.to_string());
    }

    /// Number of well-formed records that reached validation
    pub fn records_considered(&self) -> usize {
        self.accepted + self.rejected
    }

    /// Accepted records as a percentage of well-formed records
    pub fn success_rate(&self) -> f64 {
        let considered = self.records_considered();
        if considered == 0 {
            100.0
        } else {
            (self.accepted as f64 / considered as f64) * 100.0
        }
    }

    /// Get summary of batch statistics
    pub fn summary(&self) -> String {
        format!(
            "Manifest Summary: {} lines -> {} accepted, {} rejected, {} skipped ({:.1}% accepted) | \
             Parse: {} | Rules: {} | Capacity: {}",
            self.lines_read,
            self.accepted,
            self.rejected,
            self.skipped,
            self.success_rate(),
            self.parse_failures,
            self.validation_failures,
            self.capacity_failures
        )
    }
}

impl Default for BatchStats {
    fn default() -> Self {
        Self::new()
    }
}
