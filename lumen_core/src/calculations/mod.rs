//! # Lumen-Method Calculations
//!
//! The calculation stages of the pipeline, leaf-first. Each stage is a
//! pure function of its inputs with no shared state:
//!
//! - [`room_index`] - dimensionless room index K from geometry
//! - [`utilization`] - utilization factor estimate and the auto/manual mode
//! - [`sizing`] - required fixture count from the lumen-method equation
//! - [`grid`] - near-square grid layout with SHR spacing check
//! - [`energy`] - optional annual energy/cost/CO2 projection
//!
//! Degenerate numeric inputs (zero mounting height, non-positive UF/MF/
//! lumens) return conservative zeros rather than errors; see the crate
//! docs for the rationale.

pub mod energy;
pub mod grid;
pub mod room_index;
pub mod sizing;
pub mod utilization;

// Re-export commonly used items
pub use energy::{project_energy, EnergyOptions, EnergyProjection};
pub use grid::{suggest_grid, GridLayout};
pub use room_index::room_index;
pub use sizing::required_fixtures;
pub use utilization::{uf_estimate, UfMode};
