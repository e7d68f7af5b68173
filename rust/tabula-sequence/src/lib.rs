//! Value sequences feeding the X and Y columns of a chart.
//!
//! # Core Concepts
//!
//! ## Values
//!
//! Every element is a [`value::Value`]: a closed variant over integers,
//! floats, big integers and pre-formatted text. The payload types implement
//! [`value::Element`], which is how generic producers pick their storage.
//!
//! ## Sequences
//!
//! A [`sequence::Sequence`] is a fixed-length, 0-indexed, read-only view whose
//! elements all share one [`value::ValueKind`]. Two families exist:
//!
//! - **Arithmetic** ([`arithmetic::IntSequence`], [`arithmetic::FloatSequence`]):
//!   `start + i * increment`, computed on access.
//! - **Derived** ([`value_sequence::ValueSequence`]): an owned, materialized
//!   store built once, typically by the application engine.
//!
//! ## Application
//!
//! The [`apply`] module maps an arithmetic X sequence to a Y sequence through a
//! pointwise function, a 1-based lookup table, an ordered stream, or the
//! inverse of a monotone function.

pub mod apply;
pub mod arithmetic;
pub mod sequence;
pub mod value;
pub mod value_sequence;
pub mod values;

pub use arithmetic::{FloatSequence, IntSequence};
pub use sequence::Sequence;
pub use value::{Element, Value, ValueKind};
pub use value_sequence::ValueSequence;
pub use values::Values;

pub use tabula_numeric::Exhaustion;
