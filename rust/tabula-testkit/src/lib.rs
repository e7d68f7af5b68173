//! Test utilities and helpers for the tabula crates.
//!
//! This crate provides:
//! - Deterministic value producers standing in for "interesting" streams
//! - A threaded channel producer for exercising blocking consumption
//! - Float comparison and sink helpers
//!
//! It is intended for use as a dev-dependency only.

pub mod sinks;
pub mod streams;

pub use sinks::{FailingWriter, read_temp_file, temp_file};
pub use streams::{LinearBigInts, LinearInts, spawn_producer};

/// Asserts that `actual` is within a relative error of 1e-4 of `expected`
/// (absolute error when `expected` is zero).
#[track_caller]
pub fn assert_close(expected: f64, actual: f64) {
    let err = if expected == 0.0 {
        actual.abs()
    } else {
        ((expected - actual) / expected).abs()
    };
    assert!(err <= 1e-4, "expected {expected}, got {actual}");
}
