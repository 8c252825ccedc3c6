//! # Energy Projection
//!
//! Optional annual energy, cost, and CO2 figures for an installed fixture
//! count. Computed only when a per-fixture power draw is known; cost and
//! CO2 are each independently optional on top of that.

use serde::{Deserialize, Serialize};

/// Inputs for the energy projection, with defaults enumerated once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyOptions {
    /// Electrical power draw per fixture (W); projection is skipped when absent
    pub p_fixture_w: Option<f64>,

    /// Annual operating hours
    pub hours_year: f64,

    /// Electricity tariff (currency per kWh); enables the cost figure
    pub tariff: Option<f64>,

    /// Grid carbon factor (kg CO2 per kWh); enables the CO2 figure
    pub grid_factor: Option<f64>,
}

impl Default for EnergyOptions {
    fn default() -> Self {
        EnergyOptions {
            p_fixture_w: None,
            hours_year: 2000.0,
            tariff: None,
            grid_factor: None,
        }
    }
}

/// Annual energy figures for an installation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "kwh_year": 1920.0,
///   "cost_year": 288.0,
///   "co2_year_kg": 864.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyProjection {
    /// Annual energy consumption (kWh)
    pub kwh_year: f64,

    /// Annual energy cost, when a tariff was supplied
    pub cost_year: Option<f64>,

    /// Annual CO2 mass (kg), when a grid factor was supplied
    pub co2_year_kg: Option<f64>,
}

/// Project annual energy use for `n` fixtures.
///
/// Returns `None` unless a per-fixture power is supplied and `n > 0`.
/// Cost and CO2 are filled in independently from the tariff and grid
/// factor; absence of one does not block the other.
pub fn project_energy(n: u32, options: &EnergyOptions) -> Option<EnergyProjection> {
    let p_fixture_w = options.p_fixture_w?;
    if n == 0 {
        return None;
    }

    let p_total_w = n as f64 * p_fixture_w;
    let kwh_year = p_total_w * options.hours_year / 1000.0;

    Some(EnergyProjection {
        kwh_year,
        cost_year: options.tariff.map(|t| kwh_year * t),
        co2_year_kg: options.grid_factor.map(|g| kwh_year * g),
    })
}
