//! # Grid Layout
//!
//! Distributes a fixture count into a near-square rows × columns grid and
//! checks the resulting spacing against a maximum spacing-to-height ratio
//! (SHR). The layout is advisory: a regular lattice with roughly
//! half-spacing margins from the walls, good enough for a feasibility
//! estimate but not a precision placement.

use serde::{Deserialize, Serialize};

/// Suggested fixture grid for a room.
///
/// ## JSON Example
///
/// ```json
/// {
///   "rows": 4,
///   "cols": 6,
///   "step_x_m": 1.4286,
///   "step_y_m": 1.6,
///   "spacing_ok": true
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Number of fixture rows (along the width axis)
    pub rows: u32,

    /// Number of fixture columns (along the length axis)
    pub cols: u32,

    /// Fixture spacing along the room length (m)
    pub step_x_m: f64,

    /// Fixture spacing along the room width (m)
    pub step_y_m: f64,

    /// Whether both spacings respect the SHR limit (true when no limit applies)
    pub spacing_ok: bool,
}

impl GridLayout {
    /// Fixtures actually placed by this grid.
    ///
    /// May exceed the requested count because rows and columns round up;
    /// the layout is advisory, not an exact packing.
    pub fn placed(&self) -> u32 {
        self.rows * self.cols
    }
}

/// Suggest a near-square grid for `n` fixtures.
///
/// Columns are chosen so the grid's aspect ratio approximates the room's
/// (`cols = ceil(sqrt(n · L / W))`), then `rows = ceil(n / cols)`. Steps
/// divide each dimension by `cols + 1` / `rows + 1`, which places the
/// lattice with half-spacing margins from the walls.
///
/// When `shr_max` is given and the mounting height is positive, both
/// steps are checked against `shr_max × mounting_height`; with no limit
/// or no usable height, `spacing_ok` is `true`.
///
/// `n <= 0` returns the empty grid `(0, 0, 0.0, 0.0, true)` — zero
/// fixtures trivially satisfy any spacing constraint.
pub fn suggest_grid(
    n: u32,
    length_m: f64,
    width_m: f64,
    mounting_height_m: f64,
    shr_max: Option<f64>,
) -> GridLayout {
    if n == 0 {
        return GridLayout {
            rows: 0,
            cols: 0,
            step_x_m: 0.0,
            step_y_m: 0.0,
            spacing_ok: true,
        };
    }

    let cols = (n as f64 * length_m / width_m).sqrt().ceil().max(1.0) as u32;
    let rows = (n as f64 / cols as f64).ceil() as u32;

    let step_x_m = length_m / (cols as f64 + 1.0);
    let step_y_m = width_m / (rows as f64 + 1.0);

    let spacing_ok = match shr_max {
        Some(ratio) if mounting_height_m > 0.0 => {
            let max_allowed = ratio * mounting_height_m;
            step_x_m <= max_allowed && step_y_m <= max_allowed
        }
        _ => true,
    };

    GridLayout {
        rows,
        cols,
        step_x_m,
        step_y_m,
        spacing_ok,
    }
}
