//! Configuration management and validation.
//!
//! Provides the per-aircraft rule table (capacity, compatible ULD abbreviations,
//! report identifier) and the run configuration assembled from CLI arguments.

use crate::app::models::AircraftType;
use crate::constants::{
    ABBREVIATIONS_737, ABBREVIATIONS_767, AIRCRAFT_ID_737, AIRCRAFT_ID_767, MAX_LOAD_737,
    MAX_LOAD_767,
};
use crate::{Error, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Loading rules for one aircraft model
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AircraftProfile {
    pub aircraft_type: AircraftType,
    /// Maximum total ULD weight in pounds
    pub max_load: f64,
    /// Tail identifier printed in the load report
    pub aircraft_id: &'static str,
    /// ULD abbreviations that physically fit this aircraft
    pub allowed_abbreviations: &'static [&'static str],
}

const PROFILE_737: AircraftProfile = AircraftProfile {
    aircraft_type: AircraftType::B737,
    max_load: MAX_LOAD_737,
    aircraft_id: AIRCRAFT_ID_737,
    allowed_abbreviations: ABBREVIATIONS_737,
};

const PROFILE_767: AircraftProfile = AircraftProfile {
    aircraft_type: AircraftType::B767,
    max_load: MAX_LOAD_767,
    aircraft_id: AIRCRAFT_ID_767,
    allowed_abbreviations: ABBREVIATIONS_767,
};

impl AircraftProfile {
    /// Look up the rule set for an aircraft model
    pub fn for_aircraft(aircraft_type: AircraftType) -> &'static AircraftProfile {
        match aircraft_type {
            AircraftType::B737 => &PROFILE_737,
            AircraftType::B767 => &PROFILE_767,
        }
    }

    /// Whether a ULD abbreviation fits this aircraft
    pub fn accepts(&self, abbreviation: &str) -> bool {
        self.allowed_abbreviations.contains(&abbreviation)
    }
}

/// Output format for the load report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Column-aligned text report
    #[default]
    Human,
    /// JSON document for scripting
    Json,
}

/// Settings for a single manifest run
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Manifest file to read; prompted for when absent
    pub input_path: Option<PathBuf>,

    /// Load report output format
    pub report_format: ReportFormat,

    /// Print batch statistics to stderr after the report
    pub show_summary: bool,
}

impl RunConfig {
    /// Create a configuration for the given manifest path
    pub fn new(input_path: Option<PathBuf>) -> Self {
        Self {
            input_path,
            ..Default::default()
        }
    }

    /// Validate configuration values
    ///
    /// A missing file is not a configuration error; it is reported as an
    /// unreadable source when the batch runs.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.input_path {
            if path.as_os_str().is_empty() {
                return Err(Error::configuration("Manifest path is empty"));
            }

            if path.is_dir() {
                return Err(Error::configuration(format!(
                    "Manifest path is a directory: {}",
                    path.display()
                )));
            }
        }

        debug!("Run configuration validated: {:?}", self);
        Ok(())
    }
}
