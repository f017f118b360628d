//! Per-record validation rules
//!
//! Pure checks applied to every well-formed manifest line, in a fixed order:
//! ULD type, aircraft type, then ULD/aircraft compatibility. Failures are
//! returned as [`RecordError`] values; the batch processor reports them and
//! moves on to the next line.

use crate::app::models::{AircraftType, UldType};
use crate::app::services::manifest_parser::RawRecord;
use crate::config::AircraftProfile;
use thiserror::Error;

/// Reasons a single manifest record is rejected
///
/// The `Display` text is the diagnostic printed for the rejected line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Unit {uld_id} rejected: {field} '{value}' is not a valid number")]
    UnparseableNumericField {
        uld_id: String,
        field: &'static str,
        value: String,
    },

    #[error("Unit {uld_id} rejected: weight {weight} must be a non-negative number")]
    InvalidWeight { uld_id: String, weight: f64 },

    #[error("{uld_type} not Container or Pallet, rejected load.")]
    InvalidUldType { uld_type: String },

    #[error("{code} bad airplane type")]
    InvalidAircraftType { code: i32 },

    #[error("The {abbreviation} container is not compatible with the {code} aircraft.")]
    IncompatibleAbbreviation { abbreviation: String, code: i32 },

    #[error("Invalid aircraft type: {code}")]
    UnknownAircraftForAbbreviation { code: i32 },

    #[error("Unit {uld_type} not added due to weight restrictions for {aircraft_type}.")]
    CapacityExceeded {
        uld_type: UldType,
        aircraft_type: AircraftType,
    },
}

impl RecordError {
    /// Whether the record failed a rule check rather than field parsing
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidUldType { .. }
                | Self::InvalidAircraftType { .. }
                | Self::IncompatibleAbbreviation { .. }
                | Self::UnknownAircraftForAbbreviation { .. }
        )
    }

    /// Whether the record was rejected by the capacity ledger
    pub fn is_capacity_failure(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}

/// Check that the ULD type is exactly `Container` or `Pallet`
pub fn check_uld_type(uld_type: &str) -> Result<UldType, RecordError> {
    uld_type
        .parse::<UldType>()
        .map_err(|_| RecordError::InvalidUldType {
            uld_type: uld_type.to_string(),
        })
}

/// Check that the aircraft code is a supported model
pub fn check_aircraft_type(code: i32) -> Result<AircraftType, RecordError> {
    AircraftType::try_from(code).map_err(|code| RecordError::InvalidAircraftType { code })
}

/// Check that a ULD abbreviation fits the given aircraft
///
/// Takes the raw aircraft code so an unsupported code fails here too, even
/// when called without the aircraft-type check in front of it.
pub fn check_abbreviation(abbreviation: &str, code: i32) -> Result<(), RecordError> {
    let aircraft_type = AircraftType::try_from(code)
        .map_err(|code| RecordError::UnknownAircraftForAbbreviation { code })?;

    if AircraftProfile::for_aircraft(aircraft_type).accepts(abbreviation) {
        Ok(())
    } else {
        Err(RecordError::IncompatibleAbbreviation {
            abbreviation: abbreviation.to_string(),
            code,
        })
    }
}

/// Run all rule checks in order, stopping at the first failure
pub fn validate(record: &RawRecord) -> Result<(UldType, AircraftType), RecordError> {
    let uld_type = check_uld_type(&record.uld_type)?;
    let aircraft_type = check_aircraft_type(record.aircraft_code)?;
    check_abbreviation(&record.abbreviation, record.aircraft_code)?;
    Ok((uld_type, aircraft_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(uld_type: &str, abbreviation: &str, code: i32) -> RawRecord {
        RawRecord {
            uld_type: uld_type.to_string(),
            abbreviation: abbreviation.to_string(),
            uld_id: "ULD900".to_string(),
            aircraft_code: code,
            weight: 100.0,
            destination: "LAX".to_string(),
        }
    }

    #[test]
    fn test_check_uld_type() {
        assert_eq!(check_uld_type("Container"), Ok(UldType::Container));
        assert_eq!(check_uld_type("Pallet"), Ok(UldType::Pallet));

        let err = check_uld_type("Box").unwrap_err();
        assert_eq!(err.to_string(), "Box not Container or Pallet, rejected load.");
    }

    #[test]
    fn test_check_aircraft_type() {
        assert_eq!(check_aircraft_type(737), Ok(AircraftType::B737));
        assert_eq!(check_aircraft_type(767), Ok(AircraftType::B767));

        let err = check_aircraft_type(999).unwrap_err();
        assert_eq!(err.to_string(), "999 bad airplane type");
    }

    #[test]
    fn test_check_abbreviation_per_aircraft() {
        for abbreviation in ["AYF", "AYK", "AAA", "AYY", "PAG", "PMC", "PLA"] {
            assert!(check_abbreviation(abbreviation, 737).is_ok());
            assert!(check_abbreviation(abbreviation, 767).is_err());
        }
        for abbreviation in ["AKE", "APE", "AKC", "AQP", "AQF", "AAP", "P1P", "P6P"] {
            assert!(check_abbreviation(abbreviation, 767).is_ok());
            assert!(check_abbreviation(abbreviation, 737).is_err());
        }

        let err = check_abbreviation("AKE", 737).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The AKE container is not compatible with the 737 aircraft."
        );
    }

    #[test]
    fn test_check_abbreviation_unknown_aircraft() {
        let err = check_abbreviation("AYF", 747).unwrap_err();
        assert_eq!(err, RecordError::UnknownAircraftForAbbreviation { code: 747 });
        assert_eq!(err.to_string(), "Invalid aircraft type: 747");
    }

    #[test]
    fn test_validate_runs_checks_in_order() {
        // Bad ULD type wins over a bad aircraft code
        let err = validate(&raw("Box", "XXX", 999)).unwrap_err();
        assert!(matches!(err, RecordError::InvalidUldType { .. }));

        // Bad aircraft code wins over a bad abbreviation
        let err = validate(&raw("Pallet", "XXX", 999)).unwrap_err();
        assert_eq!(err, RecordError::InvalidAircraftType { code: 999 });

        let err = validate(&raw("Pallet", "XXX", 767)).unwrap_err();
        assert!(matches!(err, RecordError::IncompatibleAbbreviation { .. }));

        assert_eq!(
            validate(&raw("Pallet", "PMC", 737)),
            Ok((UldType::Pallet, AircraftType::B737))
        );
    }

    #[test]
    fn test_error_categories() {
        let capacity = RecordError::CapacityExceeded {
            uld_type: UldType::Container,
            aircraft_type: AircraftType::B737,
        };
        assert!(capacity.is_capacity_failure());
        assert!(!capacity.is_validation_failure());
        assert_eq!(
            capacity.to_string(),
            "Unit Container not added due to weight restrictions for 737."
        );

        assert!(RecordError::InvalidAircraftType { code: 1 }.is_validation_failure());
    }
}
