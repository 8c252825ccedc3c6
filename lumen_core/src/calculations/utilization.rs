//! # Utilization Factor
//!
//! Estimates the utilization factor (UF): the fraction of emitted luminous
//! flux that reaches the working plane, net of room geometry and surface
//! reflectances.
//!
//! The estimate here is a rough approximation and is not a substitute for
//! manufacturer photometric UF tables. It is intended for feasibility
//! estimates only, not code-compliant design.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LumenError;
use crate::geometry::ReflectanceProfile;

/// Estimate the utilization factor from the room index and reflectances.
///
/// Base curve: `0.35 + 0.22 · log2(1 + K)`, clamped to [0.30, 0.78].
/// UF rises with room index but saturates; the logarithm captures
/// diminishing returns as K grows and the clamp keeps the estimate inside
/// empirically plausible bounds for office-like spaces.
///
/// Each surface's deviation from its reference reflectance then nudges the
/// estimate — ceiling weighted most, floor least — and the result is
/// clamped to [0.30, 0.80]. Any finite inputs produce a bounded output.
///
/// # Example
///
/// ```rust
/// use lumen_core::calculations::utilization::uf_estimate;
/// use lumen_core::geometry::ReflectanceProfile;
///
/// let uf = uf_estimate(2.02, &ReflectanceProfile::default());
/// assert!((uf - 0.70).abs() < 0.01);
/// ```
pub fn uf_estimate(k: f64, reflectances: &ReflectanceProfile) -> f64 {
    // log2 argument floored at zero: K < -1 would otherwise go NaN, and
    // log2(0) = -inf is pulled up to 0.30 by the clamp
    let base = (0.35 + 0.22 * (1.0 + k).max(0.0).log2()).clamp(0.30, 0.78);
    let refl = (reflectances.ceiling - 0.7) * 0.10
        + (reflectances.walls - 0.5) * 0.08
        + (reflectances.floor - 0.2) * 0.02;
    (base + refl).clamp(0.30, 0.80)
}

/// How the utilization factor is obtained for a room.
///
/// Replaces the loosely-typed "either the string `auto` or a number"
/// field with a tagged variant, so the parse failure is centralized in
/// [`UfMode::from_str`] instead of a runtime string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum UfMode {
    /// Estimate UF from room index and reflectances
    #[default]
    Auto,
    /// Caller-supplied UF, used as-is (unconstrained)
    Manual(f64),
}

impl UfMode {
    /// Resolve to a concrete UF value for the given room index.
    pub fn resolve(&self, k: f64, reflectances: &ReflectanceProfile) -> f64 {
        match self {
            UfMode::Auto => uf_estimate(k, reflectances),
            UfMode::Manual(value) => *value,
        }
    }

    /// True when UF will be estimated rather than taken verbatim.
    pub fn is_auto(&self) -> bool {
        matches!(self, UfMode::Auto)
    }
}

impl FromStr for UfMode {
    type Err = LumenError;

    /// Parse `"auto"` (case-insensitive) or a float literal.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(UfMode::Auto);
        }
        trimmed
            .parse::<f64>()
            .map(UfMode::Manual)
            .map_err(|_| LumenError::parse_error("uf", raw))
    }
}

impl fmt::Display for UfMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UfMode::Auto => write!(f, "auto"),
            UfMode::Manual(value) => write!(f, "{}", value),
        }
    }
}
