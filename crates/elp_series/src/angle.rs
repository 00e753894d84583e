//! Degree → radian conversion.
//!
//! ELP 2000-82B table amplitudes are published in arcseconds and the
//! mean-argument polynomials in degrees; callers convert arguments to
//! radians before feeding them to the series routines. Series outputs
//! stay in arcseconds — only phase accumulation happens in radians.

use std::f64::consts::PI;

/// Arcseconds per degree. Callers divide series outputs (arcseconds)
/// by this to reach degrees before [`degrees_to_radians`].
pub const ARCSECONDS_PER_DEGREE: f64 = 3600.0;

/// Convert degrees to radians.
///
/// Total over all finite inputs; `degrees_to_radians(0.0)` is exactly `0.0`.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}
