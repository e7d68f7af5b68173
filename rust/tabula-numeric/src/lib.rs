//! Numeric building blocks for producing Y columns.
//!
//! - [`bisect`]: a fixed-iteration bisection solver that inverts a monotone
//!   `f64 -> f64` function.
//! - [`stream`]: adapters that pull values out of single-pass producers at
//!   strictly ascending 1-based positions.

pub mod bisect;
pub mod stream;

pub use bisect::{BISECTION_ITERATIONS, Inverse, solve};
pub use stream::{AscendingValues, Enumerated, Exhaustion, IndexedStream, Nth};
