//! Parser for whitespace-separated ULD manifest lines
//!
//! Each well-formed line carries six fields:
//!
//! ```text
//! <ULD type> <abbreviation> <ULD id> <aircraft code> <weight> <destination>
//! ```
//!
//! ## Architecture
//!
//! - [`record_parser`] - Splitting a line and building a [`RawRecord`]
//! - [`field_parsers`] - Numeric field conversion with record-level errors
//!
//! Lines with any other field count are not errors: [`parse_line`] returns
//! `Ok(None)` and the caller drops them without a diagnostic.
//!
//! ## Usage
//!
//! ```rust
//! use uld_manifest::app::services::manifest_parser::parse_line;
//!
//! let record = parse_line("Container AYF ULD001 737 5000.0 LAX")
//!     .unwrap()
//!     .expect("six fields");
//! assert_eq!(record.aircraft_code, 737);
//! assert_eq!(parse_line("Container AYF ULD001 737").unwrap(), None);
//! ```

pub mod field_parsers;
pub mod record_parser;

#[cfg(test)]
pub mod tests;

pub use record_parser::{RawRecord, parse_line};
