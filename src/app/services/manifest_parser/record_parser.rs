//! Individual manifest line parsing
//!
//! Splits a raw line on whitespace runs and converts the numeric columns.
//! ULD type and abbreviation are left as text for the validation rules.

use tracing::trace;

use super::field_parsers::{parse_aircraft_code, parse_weight};
use crate::app::services::validation::RecordError;
use crate::constants::MANIFEST_FIELD_COUNT;

/// A well-formed manifest line before rule validation
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub uld_type: String,
    pub abbreviation: String,
    pub uld_id: String,
    pub aircraft_code: i32,
    pub weight: f64,
    pub destination: String,
}

/// Parse one manifest line
///
/// Returns `Ok(None)` when the line does not have exactly six fields, and an
/// error when the aircraft code or weight is not numeric.
pub fn parse_line(line: &str) -> Result<Option<RawRecord>, RecordError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    let &[uld_type, abbreviation, uld_id, aircraft_code, weight, destination] = fields.as_slice()
    else {
        trace!(
            "Skipping line with {} fields (expected {})",
            fields.len(),
            MANIFEST_FIELD_COUNT
        );
        return Ok(None);
    };

    let aircraft_code = parse_aircraft_code(aircraft_code, uld_id)?;
    let weight = parse_weight(weight, uld_id)?;

    Ok(Some(RawRecord {
        uld_type: uld_type.to_string(),
        abbreviation: abbreviation.to_string(),
        uld_id: uld_id.to_string(),
        aircraft_code,
        weight,
        destination: destination.to_string(),
    }))
}
