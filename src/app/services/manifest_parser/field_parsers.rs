//! Field parsing utilities for manifest records
//!
//! Numeric fields that fail to parse reject the whole record; the error names
//! the field, the offending text and the ULD id for the diagnostic.

use crate::app::services::validation::RecordError;

/// Parse the aircraft code column
pub fn parse_aircraft_code(value: &str, uld_id: &str) -> Result<i32, RecordError> {
    value
        .parse::<i32>()
        .map_err(|_| unparseable(uld_id, "aircraft type", value))
}

/// Parse the weight column
///
/// Weights must be finite and non-negative so the capacity ledger only ever
/// grows.
pub fn parse_weight(value: &str, uld_id: &str) -> Result<f64, RecordError> {
    let weight = value
        .parse::<f64>()
        .map_err(|_| unparseable(uld_id, "weight", value))?;

    if !weight.is_finite() || weight < 0.0 {
        return Err(RecordError::InvalidWeight {
            uld_id: uld_id.to_string(),
            weight,
        });
    }

    Ok(weight)
}

fn unparseable(uld_id: &str, field: &'static str, value: &str) -> RecordError {
    RecordError::UnparseableNumericField {
        uld_id: uld_id.to_string(),
        field,
        value: value.to_string(),
    }
}
