//! Batch processing for ULD manifests
//!
//! This module drives every manifest line through the full pipeline and keeps
//! one bad line from affecting any other.
//!
//! # Architecture
//!
//! - [`processor`] - Main BatchProcessor struct and per-line orchestration
//! - [`stats`] - Batch statistics
//!
//! # Per-line pipeline
//!
//! 1. **Parse**: lines without exactly six fields are skipped silently
//! 2. **Sequence**: every well-formed line gets the next sequence number
//! 3. **Validate**: ULD type, aircraft type, then abbreviation compatibility
//! 4. **Load**: reserve capacity on the aircraft's ledger and register the record
//!
//! Any failure in steps 2-4 rejects only that line. The batch stops early only
//! when the manifest itself cannot be read.
//!
//! # Example Usage
//!
//! ```rust
//! use uld_manifest::{AircraftType, BatchProcessor};
//!
//! let manifest = "Container AYF ULD001 737 5000.0 LAX\nBox AYF ULD004 737 1000.0 LAX\n";
//! let mut diagnostics: Vec<u8> = Vec::new();
//!
//! let mut processor = BatchProcessor::new();
//! processor
//!     .process_reader(manifest.as_bytes(), "inline", &mut diagnostics)
//!     .unwrap();
//!
//! assert_eq!(processor.load_plan().records(AircraftType::B737).len(), 1);
//! assert_eq!(
//!     String::from_utf8(diagnostics).unwrap(),
//!     "Box not Container or Pallet, rejected load.\n"
//! );
//! ```

pub mod processor;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use processor::{BatchProcessor, LineOutcome};
pub use stats::BatchStats;
