//! Main Problem series of the ELP 2000-82B lunar theory.
//!
//! The Main Problem expresses the Keplerian-plus-solar part of the lunar
//! motion as truncated Fourier sums over the four Delaunay arguments:
//!
//! ```text
//! Σ A · sin(i₁D + i₂l′ + i₃l + i₄F)      (longitude, latitude)
//! Σ A · cos(i₁D + i₂l′ + i₃l + i₄F)      (radial distance)
//! ```
//!
//! Amplitudes A are in arcseconds, so the sums are too. The published
//! tables carry six more columns per term (∂A/∂σ₁..∂A/∂σ₆, derivatives
//! with respect to the fundamental secular constants); they are kept in
//! the coefficient rows for table parity and never read here.
//!
//! Source: Chapront-Touzé & Chapront, Lunar Solution ELP 2000-82B,
//! explanatory note, p. 2.

/// Trig selector for the shared Main-Problem reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trig {
    Sin,
    Cos,
}

/// Shared reduction for the sine and cosine Main-Problem series.
///
/// Phase of term k is the multiplier row dotted with the Delaunay vector;
/// the accumulated value is `coefficients[k][0] * trig(phase)`.
fn main_problem_sum(
    delaunay: &[f64; 4],
    multipliers: &[[i64; 4]],
    coefficients: &[[f64; 7]],
    trig: Trig,
) -> f64 {
    assert_eq!(
        multipliers.len(),
        coefficients.len(),
        "multiplier rows ({}) and coefficient rows ({}) must agree",
        multipliers.len(),
        coefficients.len()
    );

    let mut total = 0.0;
    for (mult, coef) in multipliers.iter().zip(coefficients) {
        let phase = mult[0] as f64 * delaunay[0]
            + mult[1] as f64 * delaunay[1]
            + mult[2] as f64 * delaunay[2]
            + mult[3] as f64 * delaunay[3];

        total += coef[0]
            * match trig {
                Trig::Sin => phase.sin(),
                Trig::Cos => phase.cos(),
            };
    }
    total
}

/// Sine Main-Problem series: Σ A·sin(i₁D + i₂l′ + i₃l + i₄F), in arcseconds.
///
/// Used for the longitude and latitude perturbations.
///
/// # Arguments
/// * `delaunay` — `[D, l′, l, F]` in radians, matching multiplier columns 0–3
/// * `multipliers` — one `[i₁, i₂, i₃, i₄]` row per term
/// * `coefficients` — one row per term; column 0 is the amplitude A in
///   arcseconds, columns 1–6 (∂A/∂σ) are ignored
///
/// # Panics
/// Panics if `multipliers` and `coefficients` have different lengths.
pub fn main_problem_sin(
    delaunay: &[f64; 4],
    multipliers: &[[i64; 4]],
    coefficients: &[[f64; 7]],
) -> f64 {
    main_problem_sum(delaunay, multipliers, coefficients, Trig::Sin)
}

/// Cosine Main-Problem series: Σ A·cos(i₁D + i₂l′ + i₃l + i₄F), in arcseconds.
///
/// Used for the radial-distance perturbation; otherwise identical to
/// [`main_problem_sin`].
///
/// # Panics
/// Panics if `multipliers` and `coefficients` have different lengths.
pub fn main_problem_cos(
    delaunay: &[f64; 4],
    multipliers: &[[i64; 4]],
    coefficients: &[[f64; 7]],
) -> f64 {
    main_problem_sum(delaunay, multipliers, coefficients, Trig::Cos)
}
