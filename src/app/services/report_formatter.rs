//! Load report rendering
//!
//! Presentation only: renders a finished [`LoadPlan`] as the column-aligned
//! text report, one section per aircraft, or as a JSON document.

use crate::app::models::{AircraftType, CargoRecord};
use crate::app::services::batch_processor::BatchStats;
use crate::app::services::load_plan::{AircraftLoad, LoadPlan};
use crate::config::ReportFormat;
use crate::constants::report_columns::{
    AIRCRAFT_WIDTH, DESTINATION_WIDTH, HEADERS, IDENTIFIER_WIDTH, ULD_TYPE_WIDTH, WEIGHT_PRECISION,
    WEIGHT_WIDTH,
};
use crate::{Error, Result};
use serde::Serialize;
use std::io::Write;

/// Section header naming the aircraft and its tail identifier
pub fn section_header(load: &AircraftLoad) -> String {
    format!(
        "\nLoad out of {} aircraft {}",
        load.aircraft_type(),
        load.profile().aircraft_id
    )
}

/// Column header row
pub fn column_header() -> String {
    let [uld_type, aircraft, identifier, weight, destination] = HEADERS;
    format!(
        "{:<uw$} {:<aw$} {:<iw$} {:<ww$} {:<dw$}",
        uld_type,
        aircraft,
        identifier,
        weight,
        destination,
        uw = ULD_TYPE_WIDTH,
        aw = AIRCRAFT_WIDTH,
        iw = IDENTIFIER_WIDTH,
        ww = WEIGHT_WIDTH,
        dw = DESTINATION_WIDTH,
    )
}

/// One report row for an accepted record
pub fn format_row(record: &CargoRecord) -> String {
    format!(
        "{:<uw$} {:<aw$} {:<iw$} {:<ww$.prec$} {:<dw$}",
        record.uld_type(),
        record.aircraft_type(),
        record.uld_id(),
        record.weight(),
        record.destination(),
        uw = ULD_TYPE_WIDTH,
        aw = AIRCRAFT_WIDTH,
        iw = IDENTIFIER_WIDTH,
        ww = WEIGHT_WIDTH,
        prec = WEIGHT_PRECISION,
        dw = DESTINATION_WIDTH,
    )
}

/// Render the text report for all aircraft, 737 first
pub fn render_text(plan: &LoadPlan) -> String {
    let header = column_header();
    let mut out = String::new();

    for load in plan.loads() {
        out.push_str(&section_header(load));
        out.push('\n');
        out.push_str(&header);
        out.push('\n');
        for record in load.registry() {
            out.push_str(&format_row(record));
            out.push('\n');
        }
    }

    out
}

/// JSON view of one aircraft's load
#[derive(Debug, Serialize)]
struct AircraftReport<'a> {
    aircraft_type: AircraftType,
    aircraft_code: i32,
    aircraft_id: &'static str,
    max_load: f64,
    total_weight: f64,
    records: &'a [CargoRecord],
}

/// JSON document for the whole batch
#[derive(Debug, Serialize)]
struct ManifestReport<'a> {
    aircraft: Vec<AircraftReport<'a>>,
    stats: &'a BatchStats,
}

/// Render the load plan and batch statistics as pretty-printed JSON
pub fn render_json(plan: &LoadPlan, stats: &BatchStats) -> Result<String> {
    let report = ManifestReport {
        aircraft: plan
            .loads()
            .map(|load| AircraftReport {
                aircraft_type: load.aircraft_type(),
                aircraft_code: load.aircraft_type().code(),
                aircraft_id: load.profile().aircraft_id,
                max_load: load.ledger().max_load(),
                total_weight: load.ledger().current_total(),
                records: load.registry().records(),
            })
            .collect(),
        stats,
    };

    serde_json::to_string_pretty(&report)
        .map_err(|e| Error::report("Failed to serialize load report", e))
}

/// Write the report in the requested format
pub fn write_report<W: Write>(
    out: &mut W,
    plan: &LoadPlan,
    stats: &BatchStats,
    format: ReportFormat,
) -> Result<()> {
    let rendered = match format {
        ReportFormat::Human => render_text(plan),
        ReportFormat::Json => {
            let mut json = render_json(plan, stats)?;
            json.push('\n');
            json
        }
    };

    out.write_all(rendered.as_bytes())
        .map_err(|e| Error::io("Failed to write load report", e))
}
