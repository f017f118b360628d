//! Ordered collection of accepted cargo records for one aircraft

use crate::app::models::{AircraftType, CargoRecord};
use serde::Serialize;

/// Accepted records for one aircraft, in acceptance order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CargoRegistry {
    aircraft_type: AircraftType,
    records: Vec<CargoRecord>,
}

impl CargoRegistry {
    pub fn new(aircraft_type: AircraftType) -> Self {
        Self {
            aircraft_type,
            records: Vec::new(),
        }
    }

    /// Append an accepted record
    ///
    /// Only reachable through [`AircraftLoad::accept`](super::load_plan::AircraftLoad::accept),
    /// which reserves ledger capacity first.
    pub(crate) fn push(&mut self, record: CargoRecord) {
        debug_assert_eq!(record.aircraft_type(), self.aircraft_type);
        self.records.push(record);
    }

    pub fn aircraft_type(&self) -> AircraftType {
        self.aircraft_type
    }

    pub fn records(&self) -> &[CargoRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CargoRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of the weights of all registered records
    pub fn total_weight(&self) -> f64 {
        self.records.iter().map(CargoRecord::weight).sum()
    }
}

impl<'a> IntoIterator for &'a CargoRegistry {
    type Item = &'a CargoRecord;
    type IntoIter = std::slice::Iter<'a, CargoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::UldType;

    fn record(id: &str, weight: f64) -> CargoRecord {
        CargoRecord::new(UldType::Pallet, "AKE", id, AircraftType::B767, weight, "JFK")
    }

    #[test]
    fn test_registry_preserves_insertion_order() {
        let mut registry = CargoRegistry::new(AircraftType::B767);
        assert!(registry.is_empty());

        registry.push(record("ULD-B", 10.0));
        registry.push(record("ULD-A", 20.0));
        registry.push(record("ULD-C", 30.0));

        let ids: Vec<&str> = registry.iter().map(CargoRecord::uld_id).collect();
        assert_eq!(ids, vec!["ULD-B", "ULD-A", "ULD-C"]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.total_weight(), 60.0);
    }
}
