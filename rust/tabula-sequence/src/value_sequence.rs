//! A materialized sequence of values.

use num_bigint::BigInt;
use tabula_common::{Result, error::Error};

use crate::{
    sequence::Sequence,
    value::{Element, Value, ValueKind},
    values::Values,
};

/// An owned, immutable sequence of values of a single kind.
///
/// This is what the application engine produces: every element is computed
/// once when the sequence is built, and the sequence keeps no reference to
/// whatever it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSequence {
    values: Values,
}

impl ValueSequence {
    /// Creates an empty sequence of the given kind.
    pub fn empty(kind: ValueKind) -> ValueSequence {
        ValueSequence {
            values: Values::empty(kind),
        }
    }

    /// Creates a sequence over already materialized storage.
    pub fn from_values(values: Values) -> ValueSequence {
        ValueSequence { values }
    }

    /// Creates a sequence from owned elements.
    pub fn from_elements<T: Element>(items: Vec<T>) -> ValueSequence {
        ValueSequence {
            values: T::into_values(items),
        }
    }

    /// Returns the underlying storage.
    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn into_values(self) -> Values {
        self.values
    }

    pub fn as_ints(&self) -> Option<&[i64]> {
        match &self.values {
            Values::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_floats(&self) -> Option<&[f64]> {
        match &self.values {
            Values::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_big_ints(&self) -> Option<&[BigInt]> {
        match &self.values {
            Values::BigInt(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_texts(&self) -> Option<&[String]> {
        match &self.values {
            Values::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Element> FromIterator<T> for ValueSequence {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ValueSequence::from_elements(iter.into_iter().collect())
    }
}

impl Sequence for ValueSequence {
    fn kind(&self) -> ValueKind {
        self.values.kind()
    }

    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }

    fn value_at(&self, index: usize) -> Result<Value> {
        self.values.get(index).ok_or_else(|| {
            Error::out_of_range(
                "index",
                i64::try_from(index).unwrap_or(i64::MAX),
                self.len() as u64,
            )
        })
    }
}
