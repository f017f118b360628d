//! ULD Manifest Library
//!
//! A Rust library for validating air-cargo load manifests for Boeing 737 and
//! Boeing 767 aircraft and producing a load report per aircraft.
//!
//! This library provides tools for:
//! - Parsing whitespace-separated manifest lines into typed ULD fields
//! - Validating ULD type, aircraft type and ULD/aircraft compatibility
//! - Enforcing per-aircraft maximum load with an explicit capacity ledger
//! - Processing whole manifests with per-line failure isolation
//! - Rendering column-aligned text or JSON load reports

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod batch_processor;
        pub mod capacity_ledger;
        pub mod cargo_registry;
        pub mod load_plan;
        pub mod manifest_parser;
        pub mod report_formatter;
        pub mod validation;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AircraftType, CargoRecord, UldType};
pub use app::services::batch_processor::{BatchProcessor, BatchStats, LineOutcome};
pub use app::services::load_plan::LoadPlan;
pub use app::services::validation::RecordError;
pub use config::{AircraftProfile, RunConfig};

/// Result type alias for the manifest processor
pub type Result<T> = std::result::Result<T, Error>;

/// Run-level error types
///
/// Per-record failures never surface here; they are [`RecordError`] values
/// handled inside the batch processor.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The manifest could not be opened or read
    #[error("Error reading file: {path}: {source}")]
    SourceUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report rendering error
    #[error("Report error: {message}")]
    Report {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a source-unreadable error for a manifest path
    pub fn source_unreadable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a report rendering error
    pub fn report(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Report {
            message: message.into(),
            source,
        }
    }

    /// Whether this error aborted reading the manifest itself
    pub fn is_source_failure(&self) -> bool {
        matches!(self, Self::SourceUnreadable { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
