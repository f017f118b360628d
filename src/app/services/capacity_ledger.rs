//! Per-aircraft running total of accepted ULD weight
//!
//! One ledger exists per aircraft type for the duration of a batch. The total
//! starts at zero, only grows, and never exceeds the aircraft's maximum load.

use crate::app::models::{AircraftType, UldType};
use crate::app::services::validation::RecordError;
use crate::config::AircraftProfile;
use serde::Serialize;
use tracing::trace;

/// Accumulated load for one aircraft
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacityLedger {
    aircraft_type: AircraftType,
    max_load: f64,
    current_total: f64,
}

impl CapacityLedger {
    /// Create an empty ledger using the aircraft's configured maximum load
    pub fn new(aircraft_type: AircraftType) -> Self {
        Self::with_max_load(
            aircraft_type,
            AircraftProfile::for_aircraft(aircraft_type).max_load,
        )
    }

    /// Create an empty ledger with an explicit maximum load
    pub fn with_max_load(aircraft_type: AircraftType, max_load: f64) -> Self {
        Self {
            aircraft_type,
            max_load,
            current_total: 0.0,
        }
    }

    /// Reserve capacity for a ULD, or reject it and leave the total untouched
    ///
    /// The comparison and the update happen under the same `&mut` borrow, so
    /// no other reservation can land between them.
    pub fn check_and_reserve(&mut self, uld_type: UldType, weight: f64) -> Result<(), RecordError> {
        if self.current_total + weight > self.max_load {
            trace!(
                "Rejecting {} lb on {}: {} of {} already loaded",
                weight, self.aircraft_type, self.current_total, self.max_load
            );
            return Err(RecordError::CapacityExceeded {
                uld_type,
                aircraft_type: self.aircraft_type,
            });
        }

        self.current_total += weight;
        Ok(())
    }

    pub fn aircraft_type(&self) -> AircraftType {
        self.aircraft_type
    }

    pub fn max_load(&self) -> f64 {
        self.max_load
    }

    pub fn current_total(&self) -> f64 {
        self.current_total
    }

    /// Weight that can still be loaded
    pub fn remaining(&self) -> f64 {
        self.max_load - self.current_total
    }

    /// Loaded weight as a percentage of the maximum load
    pub fn utilization(&self) -> f64 {
        if self.max_load <= 0.0 {
            0.0
        } else {
            (self.current_total / self.max_load) * 100.0
        }
    }
}
