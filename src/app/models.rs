//! Data models for ULD manifest processing
//!
//! This module contains the core data structures for representing unit load
//! devices, the aircraft they are loaded onto, and accepted cargo records.

use crate::constants::{B737_CODE, B767_CODE, uld_types};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// ULD Type
// =============================================================================

/// Physical kind of a unit load device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UldType {
    Container,
    Pallet,
}

impl UldType {
    /// Manifest spelling of this ULD type
    pub fn as_str(&self) -> &'static str {
        match self {
            UldType::Container => uld_types::CONTAINER,
            UldType::Pallet => uld_types::PALLET,
        }
    }
}

impl fmt::Display for UldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment specifiers apply in the report
        f.pad(self.as_str())
    }
}

impl FromStr for UldType {
    type Err = ();

    /// Exact, case-sensitive match against the manifest spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            uld_types::CONTAINER => Ok(UldType::Container),
            uld_types::PALLET => Ok(UldType::Pallet),
            _ => Err(()),
        }
    }
}

// =============================================================================
// Aircraft Type
// =============================================================================

/// Supported aircraft models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AircraftType {
    B737,
    B767,
}

impl AircraftType {
    /// All supported aircraft, in report order
    pub const ALL: [AircraftType; 2] = [AircraftType::B737, AircraftType::B767];

    /// Numeric model code used in manifests
    pub fn code(&self) -> i32 {
        match self {
            AircraftType::B737 => B737_CODE,
            AircraftType::B767 => B767_CODE,
        }
    }
}

impl TryFrom<i32> for AircraftType {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            B737_CODE => Ok(AircraftType::B737),
            B767_CODE => Ok(AircraftType::B767),
            other => Err(other),
        }
    }
}

impl fmt::Display for AircraftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.code().to_string())
    }
}

// =============================================================================
// Cargo Record
// =============================================================================

/// A ULD that passed validation and the capacity check
///
/// Records are only built by the batch processor once every check has passed,
/// and are never modified afterwards; fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoRecord {
    uld_type: UldType,
    abbreviation: String,
    uld_id: String,
    aircraft_type: AircraftType,
    weight: f64,
    destination: String,
}

impl CargoRecord {
    pub fn new(
        uld_type: UldType,
        abbreviation: impl Into<String>,
        uld_id: impl Into<String>,
        aircraft_type: AircraftType,
        weight: f64,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            uld_type,
            abbreviation: abbreviation.into(),
            uld_id: uld_id.into(),
            aircraft_type,
            weight,
            destination: destination.into(),
        }
    }

    pub fn uld_type(&self) -> UldType {
        self.uld_type
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    pub fn uld_id(&self) -> &str {
        &self.uld_id
    }

    pub fn aircraft_type(&self) -> AircraftType {
        self.aircraft_type
    }

    /// Weight in pounds
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}
