//! Ledger and registry pairs for every supported aircraft
//!
//! An [`AircraftLoad`] ties one aircraft's capacity ledger to its cargo
//! registry so a record is either accepted into both or rejected from both.
//! The [`LoadPlan`] holds one `AircraftLoad` per aircraft type and dispatches
//! accepted records by aircraft.

use crate::app::models::{AircraftType, CargoRecord};
use crate::app::services::capacity_ledger::CapacityLedger;
use crate::app::services::cargo_registry::CargoRegistry;
use crate::app::services::validation::RecordError;
use crate::config::AircraftProfile;
use serde::Serialize;

/// Capacity ledger and cargo registry for one aircraft
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftLoad {
    ledger: CapacityLedger,
    registry: CargoRegistry,
}

impl AircraftLoad {
    pub fn new(aircraft_type: AircraftType) -> Self {
        Self {
            ledger: CapacityLedger::new(aircraft_type),
            registry: CargoRegistry::new(aircraft_type),
        }
    }

    /// Reserve capacity for the record and register it
    ///
    /// On a capacity failure the record is dropped and neither the ledger nor
    /// the registry changes.
    pub fn accept(&mut self, record: CargoRecord) -> Result<(), RecordError> {
        self.ledger
            .check_and_reserve(record.uld_type(), record.weight())?;
        self.registry.push(record);
        Ok(())
    }

    pub fn aircraft_type(&self) -> AircraftType {
        self.ledger.aircraft_type()
    }

    pub fn profile(&self) -> &'static AircraftProfile {
        AircraftProfile::for_aircraft(self.aircraft_type())
    }

    pub fn ledger(&self) -> &CapacityLedger {
        &self.ledger
    }

    pub fn registry(&self) -> &CargoRegistry {
        &self.registry
    }
}

/// Loads for all supported aircraft
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadPlan {
    b737: AircraftLoad,
    b767: AircraftLoad,
}

impl LoadPlan {
    pub fn new() -> Self {
        Self {
            b737: AircraftLoad::new(AircraftType::B737),
            b767: AircraftLoad::new(AircraftType::B767),
        }
    }

    pub fn load(&self, aircraft_type: AircraftType) -> &AircraftLoad {
        match aircraft_type {
            AircraftType::B737 => &self.b737,
            AircraftType::B767 => &self.b767,
        }
    }

    fn load_mut(&mut self, aircraft_type: AircraftType) -> &mut AircraftLoad {
        match aircraft_type {
            AircraftType::B737 => &mut self.b737,
            AircraftType::B767 => &mut self.b767,
        }
    }

    /// Route a validated record to its aircraft's load
    pub fn accept(&mut self, record: CargoRecord) -> Result<(), RecordError> {
        self.load_mut(record.aircraft_type()).accept(record)
    }

    /// Loads in report order (737 first)
    pub fn loads(&self) -> impl Iterator<Item = &AircraftLoad> {
        AircraftType::ALL.into_iter().map(|aircraft| self.load(aircraft))
    }

    pub fn records(&self, aircraft_type: AircraftType) -> &[CargoRecord] {
        self.load(aircraft_type).registry().records()
    }

    /// Accepted weight for an aircraft, as tracked by its ledger
    pub fn total_weight(&self, aircraft_type: AircraftType) -> f64 {
        self.load(aircraft_type).ledger().current_total()
    }

    /// Number of accepted records across all aircraft
    pub fn record_count(&self) -> usize {
        self.loads().map(|load| load.registry().len()).sum()
    }
}

impl Default for LoadPlan {
    fn default() -> Self {
        Self::new()
    }
}
