//! Application constants for the ULD manifest processor
//!
//! This module contains the hardcoded aircraft rule tables, report identifiers
//! and layout constants used throughout the processor.

// =============================================================================
// Aircraft Codes
// =============================================================================

/// Numeric code for the Boeing 737
pub const B737_CODE: i32 = 737;

/// Numeric code for the Boeing 767
pub const B767_CODE: i32 = 767;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Maximum load for a Boeing 737, in pounds
pub const MAX_LOAD_737: f64 = 46_000.0;

/// Maximum load for a Boeing 767, in pounds
pub const MAX_LOAD_767: f64 = 116_000.0;

// =============================================================================
// ULD Compatibility
// =============================================================================

/// ULD abbreviations that fit a Boeing 737
pub const ABBREVIATIONS_737: &[&str] = &["AYF", "AYK", "AAA", "AYY", "PAG", "PMC", "PLA"];

/// ULD abbreviations that fit a Boeing 767
pub const ABBREVIATIONS_767: &[&str] = &["AKE", "APE", "AKC", "AQP", "AQF", "AAP", "P1P", "P6P"];

/// ULD type names accepted in the first manifest column
pub mod uld_types {
    pub const CONTAINER: &str = "Container";
    pub const PALLET: &str = "Pallet";
}

// =============================================================================
// Report Identifiers
// =============================================================================

/// Fixed tail identifier printed in the 737 report header
pub const AIRCRAFT_ID_737: &str = "IBA0123";

/// Fixed tail identifier printed in the 767 report header
pub const AIRCRAFT_ID_767: &str = "IBA0456";

// =============================================================================
// Manifest Format
// =============================================================================

/// Number of whitespace-separated fields in a well-formed manifest line
pub const MANIFEST_FIELD_COUNT: usize = 6;

/// Column widths for the text report
pub mod report_columns {
    pub const ULD_TYPE_WIDTH: usize = 20;
    pub const AIRCRAFT_WIDTH: usize = 16;
    pub const IDENTIFIER_WIDTH: usize = 16;
    pub const WEIGHT_WIDTH: usize = 20;
    pub const DESTINATION_WIDTH: usize = 16;

    /// Decimal places shown for weights
    pub const WEIGHT_PRECISION: usize = 6;

    pub const HEADERS: [&str; 5] = [
        "Pallet/Container",
        "Aircraft Type",
        "Identifier",
        "Weight (pounds)",
        "Destination",
    ];
}

/// Prompt shown when no manifest path is given on the command line
pub const INPUT_PROMPT: &str = "Please enter the name of your data file:";

/// Default log filter target
pub const LOG_TARGET: &str = "uld_manifest";
