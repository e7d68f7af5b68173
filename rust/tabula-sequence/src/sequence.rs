//! This module defines the core abstraction for sequences of values.
//!
//! It provides the [`Sequence`] trait, the read-only, indexed view that both
//! chart columns are built from, and re-exports [`ValueSequence`] for the
//! materialized implementation.

use tabula_common::Result;

use crate::value::{Value, ValueKind};

pub use super::value_sequence::ValueSequence;

/// Trait representing an abstract sequence of values.
///
/// Types implementing this trait provide access to a fixed number of values
/// of a single kind. The length never changes after construction.
pub trait Sequence {
    /// Returns the kind shared by every value in the sequence.
    fn kind(&self) -> ValueKind;

    /// Returns the number of values in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at 0-based `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index >= self.len()`.
    fn value_at(&self, index: usize) -> Result<Value>;
}

impl<'a> dyn Sequence + 'a {
    /// Iterates over all values in index order.
    ///
    /// Yields exactly `len()` items; an index the sequence fails to serve
    /// yields its error rather than ending the iteration.
    pub fn iter_values(&self) -> SequenceValues<'_> {
        SequenceValues {
            sequence: self,
            pos: 0,
        }
    }
}

/// Iterator returned by `iter_values`.
pub struct SequenceValues<'a> {
    sequence: &'a dyn Sequence,
    pos: usize,
}

impl Iterator for SequenceValues<'_> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Result<Value>> {
        if self.pos >= self.sequence.len() {
            return None;
        }
        let value = self.sequence.value_at(self.pos);
        self.pos += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.len().saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SequenceValues<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::IntSequence;

    #[test]
    fn test_iter_values() {
        let xs = IntSequence::new(5, 2, 3);
        let seq: &dyn Sequence = &xs;
        let values = seq.iter_values().collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(values, vec![Value::Int(5), Value::Int(7), Value::Int(9)]);
        assert_eq!(seq.iter_values().len(), 3);
    }

    /// Serves only its first value.
    struct Gappy;

    impl Sequence for Gappy {
        fn kind(&self) -> ValueKind {
            ValueKind::Float
        }

        fn len(&self) -> usize {
            3
        }

        fn value_at(&self, index: usize) -> Result<Value> {
            match index {
                0 => Ok(Value::Float(0.5)),
                _ => Err(tabula_common::error::Error::invalid_sequence("gap")),
            }
        }
    }

    #[test]
    fn test_iter_values_yields_errors() {
        let seq: &dyn Sequence = &Gappy;
        let items: Vec<_> = seq.iter_values().collect();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_ref().unwrap(), &Value::Float(0.5));
        assert!(items[1].as_ref().unwrap_err().is_invalid_sequence());
        assert!(seq.iter_values().collect::<Result<Vec<_>>>().is_err());
    }

    #[test]
    fn test_empty() {
        let xs = IntSequence::new(1, 1, 0);
        let seq: &dyn Sequence = &xs;
        assert!(seq.is_empty());
        assert!(seq.iter_values().next().is_none());
    }
}
