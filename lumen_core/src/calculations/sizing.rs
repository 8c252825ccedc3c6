//! # Fixture Count Sizing
//!
//! The lumen-method sizing equation: how many fixtures are needed to reach
//! a target average illuminance over the working plane.

/// Compute the required fixture count.
///
/// n = ceil(target_lux × area / (UF × MF × lumens)). Partial fixtures are
/// not physically realizable, so the result always rounds up.
///
/// Non-positive `lumens`, `uf`, or `mf` return `0` rather than dividing by
/// zero or going negative; availability over strictness for a
/// rough-estimate tool.
///
/// # Example
///
/// ```rust
/// use lumen_core::calculations::sizing::required_fixtures;
///
/// let n = required_fixtures(500.0, 80.0, 3000.0, 0.70, 0.8);
/// assert_eq!(n, 24);
/// ```
pub fn required_fixtures(target_lux: f64, area_m2: f64, lumens: f64, uf: f64, mf: f64) -> u32 {
    if lumens <= 0.0 || uf <= 0.0 || mf <= 0.0 {
        return 0;
    }
    let n = (target_lux * area_m2 / (uf * mf * lumens)).ceil();
    if n <= 0.0 {
        0
    } else {
        n as u32
    }
}
