//! # Room Pipeline
//!
//! Runs the full lumen-method pipeline for one room description:
//! geometry → room index → UF (auto or manual) → fixture count → grid
//! layout → optional energy projection. [`evaluate`] is infallible by
//! design: every degenerate numeric condition resolves to a conservative
//! zero inside the individual stages.
//!
//! ## Example
//!
//! ```rust
//! use lumen_core::pipeline::{evaluate, RoomInput};
//! use lumen_core::geometry::RoomGeometry;
//!
//! let input = RoomInput {
//!     geometry: RoomGeometry {
//!         length_m: 10.0,
//!         width_m: 8.0,
//!         height_m: 3.0,
//!         ..Default::default()
//!     },
//!     target_lux: 500.0,
//!     lumens_per_fixture: 3000.0,
//!     ..Default::default()
//! };
//!
//! let report = evaluate(&input);
//! assert_eq!(report.required_fixtures, 24);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{
    project_energy, required_fixtures, room_index, suggest_grid, EnergyOptions, EnergyProjection,
    GridLayout, UfMode,
};
use crate::geometry::{ReflectanceProfile, RoomGeometry};

/// Complete description of one room to estimate, with every default
/// enumerated once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomInput {
    /// Room dimensions
    pub geometry: RoomGeometry,

    /// Target average illuminance on the working plane (lux)
    pub target_lux: f64,

    /// Luminous output per fixture (lumens)
    pub lumens_per_fixture: f64,

    /// Maintenance factor: fraction of rated output retained in service
    pub maintenance_factor: f64,

    /// Utilization factor mode (estimate or caller-supplied)
    pub uf: UfMode,

    /// Surface reflectances used by the auto UF estimate
    pub reflectances: ReflectanceProfile,

    /// Maximum spacing-to-height ratio for the grid check, if any
    pub shr_max: Option<f64>,

    /// Energy projection inputs
    pub energy: EnergyOptions,
}

impl Default for RoomInput {
    fn default() -> Self {
        RoomInput {
            geometry: RoomGeometry::default(),
            target_lux: 0.0,
            lumens_per_fixture: 0.0,
            maintenance_factor: 0.8,
            uf: UfMode::Auto,
            reflectances: ReflectanceProfile::default(),
            shr_max: None,
            energy: EnergyOptions::default(),
        }
    }
}

/// Flat result record for one room.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_m2": 80.0,
///   "mounting_height_m": 2.2,
///   "room_index": 2.02,
///   "uf_used": 0.7,
///   "uf_was_auto": true,
///   "required_fixtures": 24,
///   "grid": { "rows": 4, "cols": 6, "step_x_m": 1.43, "step_y_m": 1.6, "spacing_ok": true },
///   "energy": null
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomReport {
    /// Floor area (m²)
    pub area_m2: f64,

    /// Mounting height Hm (m)
    pub mounting_height_m: f64,

    /// Room index K
    pub room_index: f64,

    /// Utilization factor actually applied
    pub uf_used: f64,

    /// Whether `uf_used` came from the estimator
    pub uf_was_auto: bool,

    /// Required fixture count
    pub required_fixtures: u32,

    /// Suggested grid layout
    pub grid: GridLayout,

    /// Annual energy figures, when a per-fixture power was supplied
    pub energy: Option<EnergyProjection>,
}

/// Evaluate the full pipeline for one room.
pub fn evaluate(input: &RoomInput) -> RoomReport {
    let area_m2 = input.geometry.area_m2();
    let hm = input.geometry.mounting_height_m();
    let k = room_index(input.geometry.length_m, input.geometry.width_m, hm);
    let uf_used = input.uf.resolve(k, &input.reflectances);

    let n = required_fixtures(
        input.target_lux,
        area_m2,
        input.lumens_per_fixture,
        uf_used,
        input.maintenance_factor,
    );

    let grid = suggest_grid(
        n,
        input.geometry.length_m,
        input.geometry.width_m,
        hm,
        input.shr_max,
    );

    RoomReport {
        area_m2,
        mounting_height_m: hm,
        room_index: k,
        uf_used,
        uf_was_auto: input.uf.is_auto(),
        required_fixtures: n,
        grid,
        energy: project_energy(n, &input.energy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_room() -> RoomInput {
        RoomInput {
            geometry: RoomGeometry {
                length_m: 10.0,
                width_m: 8.0,
                height_m: 3.0,
                workplane_m: 0.8,
                suspension_m: 0.0,
            },
            target_lux: 500.0,
            lumens_per_fixture: 3000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_end_to_end_reference_room() {
        let report = evaluate(&reference_room());

        assert!((report.area_m2 - 80.0).abs() < 1e-12);
        assert!((report.mounting_height_m - 2.2).abs() < 1e-12);
        assert!((report.room_index - 2.020).abs() < 1e-3);
        assert!((report.uf_used - 0.70).abs() < 0.01);
        assert!(report.uf_was_auto);
        assert_eq!(report.required_fixtures, 24);
        assert_eq!(report.grid.cols, 6);
        assert_eq!(report.grid.rows, 4);
        assert!((report.grid.step_x_m - 10.0 / 7.0).abs() < 1e-9);
        assert!((report.grid.step_y_m - 1.6).abs() < 1e-9);
        assert!(report.energy.is_none());
    }

    #[test]
    fn test_manual_uf_bypasses_estimator() {
        let input = RoomInput {
            uf: UfMode::Manual(0.5),
            ..reference_room()
        };
        let report = evaluate(&input);
        assert_eq!(report.uf_used, 0.5);
        assert!(!report.uf_was_auto);
        // ceil(40000 / (0.5 * 0.8 * 3000)) = ceil(33.33) = 34
        assert_eq!(report.required_fixtures, 34);
    }

    #[test]
    fn test_energy_attached_when_power_known() {
        let input = RoomInput {
            energy: EnergyOptions {
                p_fixture_w: Some(40.0),
                tariff: Some(0.15),
                grid_factor: Some(0.45),
                ..Default::default()
            },
            ..reference_room()
        };
        let report = evaluate(&input);
        let energy = report.energy.unwrap();
        assert!((energy.kwh_year - 1920.0).abs() < 1e-9);
        assert!((energy.cost_year.unwrap() - 288.0).abs() < 1e-9);
        assert!((energy.co2_year_kg.unwrap() - 864.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_room_yields_zeros() {
        let input = RoomInput {
            geometry: RoomGeometry {
                length_m: 10.0,
                width_m: 8.0,
                height_m: 0.5,
                workplane_m: 0.8,
                suspension_m: 0.0,
            },
            ..reference_room()
        };
        let report = evaluate(&input);
        assert_eq!(report.mounting_height_m, 0.0);
        assert_eq!(report.room_index, 0.0);
        // UF still estimated (bounded), count still computed from it
        assert!((0.30..=0.80).contains(&report.uf_used));
    }

    #[test]
    fn test_report_serialization() {
        let report = evaluate(&reference_room());
        let json = serde_json::to_string_pretty(&report).unwrap();
        let roundtrip: RoomReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, roundtrip);
    }
}
