//! Arithmetic progressions used as X columns.

use tabula_common::{Result, verify_index};

use crate::{
    sequence::Sequence,
    value::{Value, ValueKind},
};

/// `count` integers starting at `start`, stepping by `increment`.
///
/// Elements are computed on access; arithmetic wraps on `i64` overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntSequence {
    start: i64,
    increment: i64,
    count: usize,
}

impl IntSequence {
    pub fn new(start: i64, increment: i64, count: usize) -> IntSequence {
        IntSequence {
            start,
            increment,
            count,
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn increment(&self) -> i64 {
        self.increment
    }

    /// Returns the element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<i64> {
        (index < self.count).then(|| self.value(index))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = i64> + '_ {
        (0..self.count).map(|i| self.value(i))
    }

    #[inline]
    fn value(&self, index: usize) -> i64 {
        self.start
            .wrapping_add((index as i64).wrapping_mul(self.increment))
    }
}

impl Sequence for IntSequence {
    fn kind(&self) -> ValueKind {
        ValueKind::Int
    }

    fn len(&self) -> usize {
        self.count
    }

    fn value_at(&self, index: usize) -> Result<Value> {
        verify_index!(index, index, self.count);
        Ok(Value::Int(self.value(index)))
    }
}

/// `count` floats starting at `start`, stepping by `increment`.
///
/// Each element is computed as `start + index * increment` rather than by
/// repeated addition, so rounding error does not accumulate along the
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatSequence {
    start: f64,
    increment: f64,
    count: usize,
}

impl FloatSequence {
    pub fn new(start: f64, increment: f64, count: usize) -> FloatSequence {
        FloatSequence {
            start,
            increment,
            count,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        (index < self.count).then(|| self.value(index))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.count).map(|i| self.value(i))
    }

    #[inline]
    fn value(&self, index: usize) -> f64 {
        self.start + index as f64 * self.increment
    }
}

impl Sequence for FloatSequence {
    fn kind(&self) -> ValueKind {
        ValueKind::Float
    }

    fn len(&self) -> usize {
        self.count
    }

    fn value_at(&self, index: usize) -> Result<Value> {
        verify_index!(index, index, self.count);
        Ok(Value::Float(self.value(index)))
    }
}
