//! # Room Geometry
//!
//! Value records describing the room being lit. All dimensions are in
//! meters. These are transient inputs to the calculation pipeline, not
//! persisted entities.
//!
//! ## Example
//!
//! ```rust
//! use lumen_core::geometry::RoomGeometry;
//!
//! let room = RoomGeometry {
//!     length_m: 10.0,
//!     width_m: 8.0,
//!     height_m: 3.0,
//!     ..Default::default()
//! };
//! assert_eq!(room.area_m2(), 80.0);
//! assert!((room.mounting_height_m() - 2.2).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// Rectangular room dimensions in meters.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_m": 10.0,
///   "width_m": 8.0,
///   "height_m": 3.0,
///   "workplane_m": 0.8,
///   "suspension_m": 0.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomGeometry {
    /// Room length (m)
    pub length_m: f64,

    /// Room width (m)
    pub width_m: f64,

    /// Ceiling height (m)
    pub height_m: f64,

    /// Height of the working plane above the floor (m)
    pub workplane_m: f64,

    /// Suspension/recess depth of the luminaire below the ceiling (m)
    pub suspension_m: f64,
}

impl Default for RoomGeometry {
    fn default() -> Self {
        RoomGeometry {
            length_m: 0.0,
            width_m: 0.0,
            height_m: 0.0,
            workplane_m: 0.8,
            suspension_m: 0.0,
        }
    }
}

impl RoomGeometry {
    /// Floor area A = L × W (m²)
    pub fn area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }

    /// Mounting height Hm = max(0, H − workplane − suspension) (m).
    ///
    /// The vertical distance between the luminaire plane and the working
    /// plane; clamped at zero for rooms where the luminaires would sit at
    /// or below the workplane.
    pub fn mounting_height_m(&self) -> f64 {
        (self.height_m - self.workplane_m - self.suspension_m).max(0.0)
    }
}

/// Surface reflectances of the room, each conceptually in [0, 1].
///
/// Values outside [0, 1] are not rejected; the utilization-factor estimate
/// is clamped to a plausible range regardless, so out-of-range inputs
/// yield a bounded (if meaningless) result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReflectanceProfile {
    /// Ceiling reflectance (reference 0.7)
    pub ceiling: f64,

    /// Wall reflectance (reference 0.5)
    pub walls: f64,

    /// Floor reflectance (reference 0.2)
    pub floor: f64,
}

impl Default for ReflectanceProfile {
    fn default() -> Self {
        // Typical office-like finishes
        ReflectanceProfile {
            ceiling: 0.7,
            walls: 0.5,
            floor: 0.2,
        }
    }
}
