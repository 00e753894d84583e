//! Perturbation series of the ELP 2000-82B lunar theory.
//!
//! Three series families on top of the Main Problem:
//!
//! ```text
//! Σ A·sin(i₁ζ + i₂D + i₃l′ + i₄l + i₅F + φ)                      (series B)
//! Σ A·sin(i₁Me + … + i₈N + i₉D + i₁₀l + i₁₁F + φ)                (series C)
//! Σ A·sin(i₁Me + … + i₇U + i₈D + i₉l + i₁₀l′ + i₁₁F + φ)         (series D)
//! ```
//!
//! Series B covers Earth-figure, tidal, Moon-figure, relativistic, and
//! second-order planetary perturbations, which all share the same
//! five-argument-plus-precession phase structure. Series C and D are the
//! first- and second-type planetary perturbations (constant and linear).
//!
//! The two planetary layouts differ only in how the 11 multiplier columns
//! are split: C is 8 planetary + 3 Delaunay (no l′), D is 7 planetary
//! (no Neptune) + all 4 Delaunay. The planetary-vector arity (8 vs 7)
//! keeps the two entry points apart at the type level.
//!
//! Coefficient rows are (φ, A, P): phase offset in radians, amplitude in
//! arcseconds, approximate period. P is kept for table parity and never
//! read.
//!
//! Source: Chapront-Touzé & Chapront, Lunar Solution ELP 2000-82B,
//! explanatory note, pp. 2-3.

fn check_term_counts(multiplier_rows: usize, coefficient_rows: usize) {
    assert_eq!(
        multiplier_rows, coefficient_rows,
        "multiplier rows ({multiplier_rows}) and coefficient rows ({coefficient_rows}) must agree"
    );
}

/// Precession-linked series B: Σ A·sin(i₁ζ + i₂D + i₃l′ + i₄l + i₅F + φ),
/// in arcseconds.
///
/// # Arguments
/// * `precession` — precession argument ζ in radians (multiplier column 0)
/// * `delaunay` — `[D, l′, l, F]` in radians, matching multiplier columns 1–4
/// * `multipliers` — one `[i₁..i₅]` row per term
/// * `coefficients` — one `[φ, A, P]` row per term; the period P is ignored
///
/// # Panics
/// Panics if `multipliers` and `coefficients` have different lengths.
pub fn precession_perturbation(
    precession: f64,
    delaunay: &[f64; 4],
    multipliers: &[[i64; 5]],
    coefficients: &[[f64; 3]],
) -> f64 {
    check_term_counts(multipliers.len(), coefficients.len());

    let mut total = 0.0;
    for (mult, coef) in multipliers.iter().zip(coefficients) {
        let phase = mult[0] as f64 * precession
            + mult[1] as f64 * delaunay[0]
            + mult[2] as f64 * delaunay[1]
            + mult[3] as f64 * delaunay[2]
            + mult[4] as f64 * delaunay[3];

        total += coef[1] * (phase + coef[0]).sin();
    }
    total
}

/// First-type planetary series C:
/// Σ A·sin(i₁Me + i₂V + i₃T + i₄Ma + i₅J + i₆S + i₇U + i₈N + i₉D + i₁₀l + i₁₁F + φ),
/// in arcseconds. This is the variant without l′.
///
/// # Arguments
/// * `planetary` — `[Me, V, T, Ma, J, S, U, N]` mean longitudes in radians,
///   matching multiplier columns 0–7
/// * `delaunay` — `[D, l, l′, F]` in radians; columns 8–10 multiply D, l, F
///   (elements 0, 1, 3), l′ takes no part in this series
/// * `multipliers` — one 11-column row per term
/// * `coefficients` — one `[φ, A, P]` row per term; the period P is ignored
///
/// # Panics
/// Panics if `multipliers` and `coefficients` have different lengths.
pub fn planetary_perturbation_first(
    planetary: &[f64; 8],
    delaunay: &[f64; 4],
    multipliers: &[[i64; 11]],
    coefficients: &[[f64; 3]],
) -> f64 {
    check_term_counts(multipliers.len(), coefficients.len());

    let mut total = 0.0;
    for (mult, coef) in multipliers.iter().zip(coefficients) {
        let mut phase = 0.0;
        for (m, arg) in mult[..8].iter().zip(planetary) {
            phase += *m as f64 * arg;
        }
        phase += mult[8] as f64 * delaunay[0]
            + mult[9] as f64 * delaunay[1]
            + mult[10] as f64 * delaunay[3];

        total += coef[1] * (phase + coef[0]).sin();
    }
    total
}

/// Second-type planetary series D:
/// Σ A·sin(i₁Me + i₂V + i₃T + i₄Ma + i₅J + i₆S + i₇U + i₈D + i₉l + i₁₀l′ + i₁₁F + φ),
/// in arcseconds. This is the variant without Neptune.
///
/// # Arguments
/// * `planetary` — `[Me, V, T, Ma, J, S, U]` mean longitudes in radians,
///   matching multiplier columns 0–6
/// * `delaunay` — `[D, l, l′, F]` in radians, matching multiplier columns 7–10
/// * `multipliers` — one 11-column row per term
/// * `coefficients` — one `[φ, A, P]` row per term; the period P is ignored
///
/// # Panics
/// Panics if `multipliers` and `coefficients` have different lengths.
pub fn planetary_perturbation_second(
    planetary: &[f64; 7],
    delaunay: &[f64; 4],
    multipliers: &[[i64; 11]],
    coefficients: &[[f64; 3]],
) -> f64 {
    check_term_counts(multipliers.len(), coefficients.len());

    let mut total = 0.0;
    for (mult, coef) in multipliers.iter().zip(coefficients) {
        let mut phase = 0.0;
        for (m, arg) in mult[..7].iter().zip(planetary) {
            phase += *m as f64 * arg;
        }
        phase += mult[7] as f64 * delaunay[0]
            + mult[8] as f64 * delaunay[1]
            + mult[9] as f64 * delaunay[2]
            + mult[10] as f64 * delaunay[3];

        total += coef[1] * (phase + coef[0]).sin();
    }
    total
}
