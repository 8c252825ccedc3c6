//! # Luxplan CLI
//!
//! Terminal front end for the lumen-method estimation engine. Two modes:
//!
//! - `room` - estimate one room and print a human-readable report
//! - `batch` - enrich a CSV table of rooms, one pipeline run per row
//!
//! The UF estimate used in `auto` mode is a rough approximation, not a
//! substitute for manufacturer photometric UF tables; results are for
//! feasibility estimates only, not code-compliant design.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use lumen_core::calculations::EnergyOptions;
use lumen_core::geometry::{ReflectanceProfile, RoomGeometry};
use lumen_core::pipeline::{evaluate, RoomInput};
use lumen_core::UfMode;

#[derive(Parser, Debug)]
#[command(
    name = "luxplan",
    version,
    about = "Lumen-method fixture count and layout estimator (rough estimates, not code-compliant design)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate fixtures and layout for a single room
    Room(RoomArgs),
    /// Apply the pipeline to every row of a CSV table
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
struct RoomArgs {
    /// Room length (m)
    #[arg(long)]
    length: f64,

    /// Room width (m)
    #[arg(long)]
    width: f64,

    /// Ceiling height (m)
    #[arg(long)]
    height: f64,

    /// Working plane height (m)
    #[arg(long, default_value_t = 0.8)]
    workplane: f64,

    /// Luminaire suspension/recess depth (m)
    #[arg(long, default_value_t = 0.0)]
    suspension: f64,

    /// Target illuminance on the working plane (lux)
    #[arg(long)]
    target_lux: f64,

    /// Luminous output per fixture (lm)
    #[arg(long)]
    lumens: f64,

    /// Maintenance factor (0..1)
    #[arg(long, default_value_t = 0.8)]
    mf: f64,

    /// Utilization factor: a number, or "auto" to estimate from the room
    #[arg(long, default_value = "auto")]
    uf: UfMode,

    /// Ceiling reflectance (0..1)
    #[arg(long, default_value_t = 0.7)]
    rho_c: f64,

    /// Wall reflectance (0..1)
    #[arg(long, default_value_t = 0.5)]
    rho_w: f64,

    /// Floor reflectance (0..1)
    #[arg(long, default_value_t = 0.2)]
    rho_f: f64,

    /// Maximum spacing-to-height ratio (SHRmax)
    #[arg(long)]
    shr_max: Option<f64>,

    /// Power draw per fixture (W), enables the energy block
    #[arg(long)]
    p_fixture: Option<f64>,

    /// Operating hours per year
    #[arg(long, default_value_t = 2000.0)]
    hours_year: f64,

    /// Electricity tariff (currency per kWh)
    #[arg(long)]
    tariff: Option<f64>,

    /// Grid carbon factor (kg CO2 per kWh)
    #[arg(long)]
    grid_factor: Option<f64>,

    /// Also print the full report as pretty JSON
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Input CSV of room descriptions
    input: PathBuf,

    /// Output CSV with derived columns appended
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Room(args) => run_room(args),
        Commands::Batch(args) => run_batch(args),
    }
}

fn run_room(args: RoomArgs) -> Result<()> {
    let input = RoomInput {
        geometry: RoomGeometry {
            length_m: args.length,
            width_m: args.width,
            height_m: args.height,
            workplane_m: args.workplane,
            suspension_m: args.suspension,
        },
        target_lux: args.target_lux,
        lumens_per_fixture: args.lumens,
        maintenance_factor: args.mf,
        uf: args.uf,
        reflectances: ReflectanceProfile {
            ceiling: args.rho_c,
            walls: args.rho_w,
            floor: args.rho_f,
        },
        shr_max: args.shr_max,
        energy: EnergyOptions {
            p_fixture_w: args.p_fixture,
            hours_year: args.hours_year,
            tariff: args.tariff,
            grid_factor: args.grid_factor,
        },
    };

    let report = evaluate(&input);

    println!(
        "Area: {:.2} m^2, Hm: {:.2} m, Room Index K: {:.2}",
        report.area_m2, report.mounting_height_m, report.room_index
    );
    println!(
        "UF: {:.2} (mode: {}), MF: {:.2}",
        report.uf_used,
        if report.uf_was_auto { "auto" } else { "manual" },
        input.maintenance_factor
    );
    println!("Required fixtures: {}", report.required_fixtures);
    println!("{}", grid_summary(&report.grid));

    if let Some(energy) = &report.energy {
        let mut line = format!("Energy/year: {:.1} kWh", energy.kwh_year);
        if let Some(cost) = energy.cost_year {
            line.push_str(&format!(", Cost/year: {:.2}", cost));
        }
        if let Some(co2) = energy.co2_year_kg {
            line.push_str(&format!(", CO2/year: {:.1} kg", co2));
        }
        println!("{}", line);
    }

    if args.json {
        println!();
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
    }

    Ok(())
}

fn grid_summary(grid: &lumen_core::GridLayout) -> String {
    format!(
        "Suggested grid: {} rows × {} cols; step ≈ {:.2} m (X), {:.2} m (Y); spacing ok: {}",
        grid.rows, grid.cols, grid.step_x_m, grid.step_y_m, grid.spacing_ok
    )
}

fn run_batch(args: BatchArgs) -> Result<()> {
    let count = lumen_core::batch::process_csv(&args.input, &args.output)
        .with_context(|| format!("processing '{}'", args.input.display()))?;
    println!("Saved: {} ({} rows)", args.output.display(), count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_room_defaults() {
        let cli = Cli::parse_from([
            "luxplan", "room", "--length", "10", "--width", "8", "--height", "3",
            "--target-lux", "500", "--lumens", "3000",
        ]);
        match cli.command {
            Commands::Room(args) => {
                assert_eq!(args.workplane, 0.8);
                assert_eq!(args.mf, 0.8);
                assert_eq!(args.uf, UfMode::Auto);
                assert_eq!(args.hours_year, 2000.0);
                assert!(args.shr_max.is_none());
            }
            _ => panic!("expected room subcommand"),
        }
    }

    #[test]
    fn test_manual_uf_literal() {
        let cli = Cli::parse_from([
            "luxplan", "room", "--length", "10", "--width", "8", "--height", "3",
            "--target-lux", "500", "--lumens", "3000", "--uf", "0.65",
        ]);
        match cli.command {
            Commands::Room(args) => assert_eq!(args.uf, UfMode::Manual(0.65)),
            _ => panic!("expected room subcommand"),
        }
    }

    #[test]
    fn test_grid_summary_line() {
        let grid = lumen_core::GridLayout {
            rows: 4,
            cols: 6,
            step_x_m: 10.0 / 7.0,
            step_y_m: 1.6,
            spacing_ok: true,
        };
        assert_eq!(
            grid_summary(&grid),
            "Suggested grid: 4 rows × 6 cols; step ≈ 1.43 m (X), 1.60 m (Y); spacing ok: true"
        );
    }

    #[test]
    fn test_bad_uf_literal_rejected() {
        let result = Cli::try_parse_from([
            "luxplan", "room", "--length", "10", "--width", "8", "--height", "3",
            "--target-lux", "500", "--lumens", "3000", "--uf", "bogus",
        ]);
        assert!(result.is_err());
    }
}
