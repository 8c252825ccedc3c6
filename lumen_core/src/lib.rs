//! # lumen_core - Lumen-Method Lighting Estimation Engine
//!
//! `lumen_core` estimates the number and layout of light fixtures needed to
//! reach a target illuminance in a rectangular room, using the classic
//! lumen method from illumination engineering. It is built for quick
//! feasibility estimates, explicitly not code-compliant design: the
//! utilization-factor estimate is a rough approximation and is not a
//! substitute for manufacturer photometric UF tables.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions that take input and return results
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Conservative guards**: degenerate numeric inputs (zero mounting
//!   height, non-positive UF/MF/lumens) return zeros instead of failing
//! - **Structured errors**: the few boundary failures (manual-UF parsing,
//!   batch file I/O) are typed, not strings
//!
//! ## Quick Start
//!
//! ```rust
//! use lumen_core::geometry::RoomGeometry;
//! use lumen_core::pipeline::{evaluate, RoomInput};
//!
//! let report = evaluate(&RoomInput {
//!     geometry: RoomGeometry {
//!         length_m: 10.0,
//!         width_m: 8.0,
//!         height_m: 3.0,
//!         ..Default::default()
//!     },
//!     target_lux: 500.0,
//!     lumens_per_fixture: 3000.0,
//!     ..Default::default()
//! });
//!
//! assert_eq!(report.required_fixtures, 24);
//! println!("{}", serde_json::to_string_pretty(&report).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - room dimensions and surface reflectances
//! - [`calculations`] - the individual pipeline stages (room index, UF,
//!   sizing, grid, energy)
//! - [`pipeline`] - one-call evaluation of a full room description
//! - [`batch`] - CSV batch driver applying the pipeline per row
//! - [`errors`] - structured error types

pub mod batch;
pub mod calculations;
pub mod errors;
pub mod geometry;
pub mod pipeline;

// Re-export commonly used types at crate root for convenience
pub use calculations::{EnergyOptions, EnergyProjection, GridLayout, UfMode};
pub use errors::{LumenError, LumenResult};
pub use geometry::{ReflectanceProfile, RoomGeometry};
pub use pipeline::{evaluate, RoomInput, RoomReport};
