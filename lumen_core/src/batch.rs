//! # Batch Driver
//!
//! Row-oriented batch processing: reads a CSV table of room descriptions,
//! runs the pipeline once per row, and writes an enriched table with all
//! derived columns appended. Rows are independent pure mappings and the
//! output preserves input row order.
//!
//! Per-row optional columns take the same defaults as [`RoomInput`], so a
//! table only needs `length,width,height,target_lux,lumens` to be usable.
//!
//! ## Example
//!
//! ```rust
//! use lumen_core::batch::run_batch;
//!
//! let input = "length,width,height,target_lux,lumens\n10,8,3,500,3000\n";
//! let mut output = Vec::new();
//! let count = run_batch(input.as_bytes(), &mut output).unwrap();
//! assert_eq!(count, 1);
//! ```

use std::fs::File;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculations::EnergyOptions;
use crate::errors::{LumenError, LumenResult};
use crate::geometry::{ReflectanceProfile, RoomGeometry};
use crate::pipeline::{evaluate, RoomInput};

/// One input row of the batch table.
///
/// Required columns: `length`, `width`, `height`, `target_lux`, `lumens`.
/// Everything else is optional and falls back to the [`RoomInput`]
/// defaults for that row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchRow {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub target_lux: f64,
    pub lumens: f64,
    #[serde(default)]
    pub workplane: Option<f64>,
    #[serde(default)]
    pub suspension: Option<f64>,
    #[serde(default)]
    pub mf: Option<f64>,
    /// `"auto"` or a numeric literal; defaults to auto
    #[serde(default)]
    pub uf: Option<String>,
    #[serde(default)]
    pub rho_c: Option<f64>,
    #[serde(default)]
    pub rho_w: Option<f64>,
    #[serde(default)]
    pub rho_f: Option<f64>,
    #[serde(default)]
    pub shr_max: Option<f64>,
    #[serde(default)]
    pub p_fixture: Option<f64>,
    #[serde(default)]
    pub hours_year: Option<f64>,
    #[serde(default)]
    pub tariff: Option<f64>,
    #[serde(default)]
    pub grid_factor: Option<f64>,
}

/// One output row: the input columns echoed, then every derived column.
/// Energy columns stay empty when the projection does not apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRow {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub workplane: f64,
    pub suspension: f64,
    pub target_lux: f64,
    pub lumens: f64,
    pub mf: f64,
    pub uf: String,
    pub rho_c: f64,
    pub rho_w: f64,
    pub rho_f: f64,
    pub shr_max: Option<f64>,
    pub p_fixture: Option<f64>,
    pub hours_year: f64,
    pub tariff: Option<f64>,
    pub grid_factor: Option<f64>,
    pub area: f64,
    pub hm: f64,
    pub room_index: f64,
    pub uf_used: f64,
    pub required_fixtures: u32,
    pub rows: u32,
    pub cols: u32,
    pub step_x: f64,
    pub step_y: f64,
    pub spacing_ok: bool,
    pub kwh_year: Option<f64>,
    pub cost_year: Option<f64>,
    pub co2_year: Option<f64>,
}

/// Map one input row to its enriched output row.
///
/// Pure; the only failure is a `uf` cell that is neither `auto` nor a
/// number. [`run_batch`] qualifies that error with the row number.
pub fn enrich_row(row: &BatchRow) -> LumenResult<EnrichedRow> {
    let defaults = RoomInput::default();

    let uf_raw = row.uf.as_deref().unwrap_or("auto");
    let uf_mode: crate::calculations::UfMode = uf_raw.parse()?;

    let input = RoomInput {
        geometry: RoomGeometry {
            length_m: row.length,
            width_m: row.width,
            height_m: row.height,
            workplane_m: row.workplane.unwrap_or(defaults.geometry.workplane_m),
            suspension_m: row.suspension.unwrap_or(defaults.geometry.suspension_m),
        },
        target_lux: row.target_lux,
        lumens_per_fixture: row.lumens,
        maintenance_factor: row.mf.unwrap_or(defaults.maintenance_factor),
        uf: uf_mode,
        reflectances: ReflectanceProfile {
            ceiling: row.rho_c.unwrap_or(defaults.reflectances.ceiling),
            walls: row.rho_w.unwrap_or(defaults.reflectances.walls),
            floor: row.rho_f.unwrap_or(defaults.reflectances.floor),
        },
        shr_max: row.shr_max,
        energy: EnergyOptions {
            p_fixture_w: row.p_fixture,
            hours_year: row.hours_year.unwrap_or(defaults.energy.hours_year),
            tariff: row.tariff,
            grid_factor: row.grid_factor,
        },
    };

    let report = evaluate(&input);

    Ok(EnrichedRow {
        length: input.geometry.length_m,
        width: input.geometry.width_m,
        height: input.geometry.height_m,
        workplane: input.geometry.workplane_m,
        suspension: input.geometry.suspension_m,
        target_lux: input.target_lux,
        lumens: input.lumens_per_fixture,
        mf: input.maintenance_factor,
        uf: uf_raw.to_string(),
        rho_c: input.reflectances.ceiling,
        rho_w: input.reflectances.walls,
        rho_f: input.reflectances.floor,
        shr_max: input.shr_max,
        p_fixture: input.energy.p_fixture_w,
        hours_year: input.energy.hours_year,
        tariff: input.energy.tariff,
        grid_factor: input.energy.grid_factor,
        area: report.area_m2,
        hm: report.mounting_height_m,
        room_index: report.room_index,
        uf_used: report.uf_used,
        required_fixtures: report.required_fixtures,
        rows: report.grid.rows,
        cols: report.grid.cols,
        step_x: report.grid.step_x_m,
        step_y: report.grid.step_y_m,
        spacing_ok: report.grid.spacing_ok,
        kwh_year: report.energy.map(|e| e.kwh_year),
        cost_year: report.energy.and_then(|e| e.cost_year),
        co2_year: report.energy.and_then(|e| e.co2_year_kg),
    })
}

/// Run the batch over any reader/writer pair.
///
/// Returns the number of rows processed. Output row order matches input
/// row order; a malformed row aborts the batch with the offending row
/// number in the error.
pub fn run_batch<R: io::Read, W: io::Write>(input: R, output: W) -> LumenResult<usize> {
    let mut reader = csv::Reader::from_reader(input);
    let mut writer = csv::Writer::from_writer(output);

    let mut count = 0usize;
    for (index, record) in reader.deserialize::<BatchRow>().enumerate() {
        // Header is line 1; data rows start at 2
        let line = index + 2;
        let row = record.map_err(|e| LumenError::SerializationError {
            reason: format!("row {}: {}", line, e),
        })?;
        let enriched = enrich_row(&row).map_err(|e| match e {
            LumenError::ParseError { field, value } => {
                LumenError::parse_error(format!("{} (row {})", field, line), value)
            }
            other => other,
        })?;
        writer
            .serialize(enriched)
            .map_err(|e| LumenError::SerializationError {
                reason: format!("row {}: {}", line, e),
            })?;
        count += 1;
    }

    writer
        .flush()
        .map_err(|e| LumenError::SerializationError {
            reason: e.to_string(),
        })?;
    Ok(count)
}

/// Process an input CSV file into an enriched output CSV file.
pub fn process_csv(input_path: &Path, output_path: &Path) -> LumenResult<usize> {
    let input = File::open(input_path).map_err(|e| {
        LumenError::file_error("read", input_path.display().to_string(), e.to_string())
    })?;
    let output = File::create(output_path).map_err(|e| {
        LumenError::file_error("write", output_path.display().to_string(), e.to_string())
    })?;
    run_batch(input, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_output(bytes: &[u8]) -> Vec<EnrichedRow> {
        csv::Reader::from_reader(bytes)
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_minimal_columns_take_defaults() {
        let input = "length,width,height,target_lux,lumens\n10,8,3,500,3000\n";
        let mut output = Vec::new();
        let count = run_batch(input.as_bytes(), &mut output).unwrap();
        assert_eq!(count, 1);

        let rows = parse_output(&output);
        let row = &rows[0];
        assert_eq!(row.workplane, 0.8);
        assert_eq!(row.mf, 0.8);
        assert_eq!(row.uf, "auto");
        assert_eq!(row.hours_year, 2000.0);
        assert_eq!(row.area, 80.0);
        assert!((row.hm - 2.2).abs() < 1e-12);
        assert!((row.room_index - 2.020).abs() < 1e-3);
        assert_eq!(row.required_fixtures, 24);
        assert_eq!(row.cols, 6);
        assert_eq!(row.rows, 4);
        assert!(row.spacing_ok);
        assert!(row.kwh_year.is_none());
    }

    #[test]
    fn test_energy_columns_when_power_present() {
        let input = "\
length,width,height,target_lux,lumens,p_fixture,tariff,grid_factor
10,8,3,500,3000,40,0.15,0.45
";
        let mut output = Vec::new();
        run_batch(input.as_bytes(), &mut output).unwrap();

        let rows = parse_output(&output);
        assert!((rows[0].kwh_year.unwrap() - 1920.0).abs() < 1e-9);
        assert!((rows[0].cost_year.unwrap() - 288.0).abs() < 1e-9);
        assert!((rows[0].co2_year.unwrap() - 864.0).abs() < 1e-9);
    }

    #[test]
    fn test_per_row_manual_uf_and_order() {
        let input = "\
length,width,height,target_lux,lumens,uf
10,8,3,500,3000,auto
10,8,3,500,3000,0.5
";
        let mut output = Vec::new();
        let count = run_batch(input.as_bytes(), &mut output).unwrap();
        assert_eq!(count, 2);

        let rows = parse_output(&output);
        assert_eq!(rows[0].uf, "auto");
        assert_eq!(rows[0].required_fixtures, 24);
        assert_eq!(rows[1].uf, "0.5");
        assert_eq!(rows[1].uf_used, 0.5);
        assert_eq!(rows[1].required_fixtures, 34);
    }

    #[test]
    fn test_empty_uf_cell_means_auto() {
        let input = "\
length,width,height,target_lux,lumens,uf
10,8,3,500,3000,
";
        let mut output = Vec::new();
        run_batch(input.as_bytes(), &mut output).unwrap();
        let rows = parse_output(&output);
        assert!((rows[0].uf_used - 0.70).abs() < 0.01);
    }

    #[test]
    fn test_enrich_row_reports_bad_uf() {
        let row = BatchRow {
            length: 10.0,
            width: 8.0,
            height: 3.0,
            target_lux: 500.0,
            lumens: 3000.0,
            workplane: None,
            suspension: None,
            mf: None,
            uf: Some("bogus".to_string()),
            rho_c: None,
            rho_w: None,
            rho_f: None,
            shr_max: None,
            p_fixture: None,
            hours_year: None,
            tariff: None,
            grid_factor: None,
        };
        let err = enrich_row(&row).unwrap_err();
        assert_eq!(err, LumenError::parse_error("uf", "bogus"));
    }

    #[test]
    fn test_bad_uf_aborts_with_row_number() {
        let input = "\
length,width,height,target_lux,lumens,uf
10,8,3,500,3000,auto
10,8,3,500,3000,bogus
";
        let mut output = Vec::new();
        let err = run_batch(input.as_bytes(), &mut output).unwrap_err();
        assert_eq!(err.error_code(), "PARSE_ERROR");
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn test_shr_violation_flagged() {
        let input = "\
length,width,height,target_lux,lumens,shr_max
10,8,3,500,3000,0.5
";
        let mut output = Vec::new();
        run_batch(input.as_bytes(), &mut output).unwrap();
        let rows = parse_output(&output);
        assert!(!rows[0].spacing_ok);
    }

    #[test]
    fn test_missing_required_column_is_error() {
        let input = "length,width,height,target_lux\n10,8,3,500\n";
        let mut output = Vec::new();
        let err = run_batch(input.as_bytes(), &mut output).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
