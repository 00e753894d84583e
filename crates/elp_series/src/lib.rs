//! Series evaluation for the ELP 2000-82B lunar theory.
//!
//! This crate provides the five Fourier-series reductions at the heart of
//! ELP 2000-82B: the sine and cosine Main-Problem series over the Delaunay
//! arguments, the precession-linked perturbation series, and the two
//! planetary perturbation series. Each routine reduces a multiplier table
//! and an aligned coefficient table against current argument values into a
//! single sum in arcseconds.
//!
//! Loading the published coefficient tables, computing the arguments from
//! time, and assembling the sums into ecliptic coordinates are caller
//! responsibilities; every routine here is a stateless pure reduction,
//! safe to call concurrently over shared read-only tables.
//!
//! Source: Chapront-Touzé & Chapront, Lunar Solution ELP 2000-82B,
//! explanatory note. Public domain theory data.

pub mod angle;
pub mod main_problem;
pub mod perturbations;

pub use angle::{degrees_to_radians, ARCSECONDS_PER_DEGREE};
pub use main_problem::{main_problem_cos, main_problem_sin};
pub use perturbations::{
    planetary_perturbation_first, planetary_perturbation_second, precession_perturbation,
};
