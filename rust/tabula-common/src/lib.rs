//! Core definitions (error model and precondition helpers), relied upon by all tabula-* crates.

pub mod error;
pub mod result;

pub use result::Result;
