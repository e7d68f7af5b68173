//! Typed, owned storage behind a [`ValueSequence`](crate::value_sequence::ValueSequence).

use num_bigint::BigInt;

use crate::value::{Value, ValueKind};

/// Materialized elements of a single kind.
///
/// Keeping one vector per kind (rather than a `Vec<Value>`) makes the
/// single-kind invariant of a sequence structural.
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    Int(Vec<i64>),
    Float(Vec<f64>),
    BigInt(Vec<BigInt>),
    Text(Vec<String>),
}

impl Values {
    /// Creates empty storage for `kind`.
    pub fn empty(kind: ValueKind) -> Values {
        match kind {
            ValueKind::Int => Values::Int(Vec::new()),
            ValueKind::Float => Values::Float(Vec::new()),
            ValueKind::BigInt => Values::BigInt(Vec::new()),
            ValueKind::Text => Values::Text(Vec::new()),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Values::Int(_) => ValueKind::Int,
            Values::Float(_) => ValueKind::Float,
            Values::BigInt(_) => ValueKind::BigInt,
            Values::Text(_) => ValueKind::Text,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Values::Int(v) => v.len(),
            Values::Float(v) => v.len(),
            Values::BigInt(v) => v.len(),
            Values::Text(v) => v.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Value> {
        match self {
            Values::Int(v) => v.get(index).copied().map(Value::Int),
            Values::Float(v) => v.get(index).copied().map(Value::Float),
            Values::BigInt(v) => v.get(index).cloned().map(Value::BigInt),
            Values::Text(v) => v.get(index).cloned().map(Value::Text),
        }
    }
}
