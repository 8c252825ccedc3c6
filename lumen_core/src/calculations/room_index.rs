//! # Room Index
//!
//! The dimensionless room index K summarizes room proportions relative to
//! mounting height. Larger K means a deeper/larger room relative to the
//! luminaire plane, which raises attainable light utilization.

/// Compute the room index K = (L × W) / (Hm × (L + W)).
///
/// Degenerate rooms are guarded rather than rejected: a non-positive
/// mounting height or zero perimeter returns `0.0`.
///
/// # Example
///
/// ```rust
/// use lumen_core::calculations::room_index::room_index;
///
/// let k = room_index(10.0, 8.0, 2.2);
/// assert!((k - 80.0 / (2.2 * 18.0)).abs() < 1e-12);
/// assert_eq!(room_index(10.0, 8.0, 0.0), 0.0);
/// ```
pub fn room_index(length_m: f64, width_m: f64, mounting_height_m: f64) -> f64 {
    if mounting_height_m <= 0.0 || length_m + width_m == 0.0 {
        return 0.0;
    }
    (length_m * width_m) / (mounting_height_m * (length_m + width_m))
}
