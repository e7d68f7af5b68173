//! The function application engine: deriving Y sequences from X sequences.
//!
//! Every mode materializes its result into a [`ValueSequence`] of the same
//! length as the X sequence.
//!
//! | mode | X requirement | failure |
//! |------|---------------|---------|
//! | [`IntSequence::apply`], [`FloatSequence::apply`] | none | never |
//! | [`IntSequence::apply_lookup`] | each x in `[1, table.len()]` | `OutOfRange`, per access |
//! | [`IntSequence::apply_stream`] and friends | `x >= 1`, strictly ascending | `InvalidSequence`, before consumption |
//! | [`FloatSequence::apply_inverse`] | none | `InvalidArgument` for bad bounds |

use num_traits::Zero;
use tabula_common::{Result, error::Error, verify_sequence};
use tabula_numeric::{AscendingValues, Enumerated, Exhaustion, IndexedStream, Inverse, Nth};

use crate::{
    arithmetic::{FloatSequence, IntSequence},
    sequence::Sequence,
    value::Element,
    value_sequence::ValueSequence,
};

impl IntSequence {
    /// Applies `f` to each X value.
    ///
    /// The result kind follows `T`: `|x| x * x` yields integers,
    /// `|x| BigInt::from(x).pow(3)` big integers, `|x| format!(..)` text.
    pub fn apply<T, F>(&self, f: F) -> ValueSequence
    where
        T: Element,
        F: FnMut(i64) -> T,
    {
        self.iter().map(f).collect()
    }

    /// Uses each X value as a 1-based position into `table`: X = 1 yields
    /// `table[0]`, X = 2 yields `table[1]` and so on.
    ///
    /// # Errors
    ///
    /// `OutOfRange` for the first X value outside `[1, table.len()]`.
    pub fn apply_lookup<T>(&self, table: &[T]) -> Result<ValueSequence>
    where
        T: Element + Clone,
    {
        let items = self
            .iter()
            .map(|x| lookup(table, x))
            .collect::<Result<Vec<T>>>()?;
        Ok(ValueSequence::from_elements(items))
    }

    /// Uses `stream` as a 1-based table that can only be read forward: X = 1
    /// yields the first value off the stream, X = 2 the second, and so on.
    ///
    /// If the stream runs out of values, the remaining Y values are zero.
    /// Use [`apply_indexed_stream`](Self::apply_indexed_stream) with
    /// [`Exhaustion::Fail`] to treat that as an error instead.
    ///
    /// # Errors
    ///
    /// `InvalidSequence` unless the X values are all `>= 1` and strictly
    /// ascending. This is checked before the stream is touched.
    pub fn apply_stream<T, I>(&self, stream: I) -> Result<ValueSequence>
    where
        T: Element + Zero,
        I: IntoIterator<Item = T>,
    {
        self.apply_indexed_stream(Enumerated::new(stream), Exhaustion::ZeroFill)
    }

    /// Reads Y values from an indexed producer at the X positions.
    ///
    /// For each X value the producer is advanced until its index reaches or
    /// passes X. A position the producer never supplies resolves according
    /// to `exhaustion`.
    ///
    /// # Errors
    ///
    /// `InvalidSequence` if the X values are not all `>= 1` and strictly
    /// ascending (checked up front), if the producer breaks its ordering, or
    /// if a value is missing under [`Exhaustion::Fail`].
    pub fn apply_indexed_stream<S>(
        &self,
        stream: S,
        exhaustion: Exhaustion,
    ) -> Result<ValueSequence>
    where
        S: IndexedStream,
        S::Item: Element + Zero,
    {
        self.verify_stream_positions()?;
        log::debug!(
            "applying stream over {} positions ({exhaustion:?})",
            self.len()
        );
        let mut nth = Nth::new(stream, exhaustion);
        let items = self
            .iter()
            .map(|x| nth.nth(x as u64))
            .collect::<Result<Vec<_>>>()?;
        Ok(ValueSequence::from_elements(items))
    }

    /// Reads Y values from a source of strictly ascending integers, such as
    /// the receiving end of a channel: X = n yields the n-th value received.
    ///
    /// Unlike [`apply_stream`](Self::apply_stream), running out of values is
    /// an error: the source must supply at least as many values as the
    /// largest X requested.
    ///
    /// # Errors
    ///
    /// `InvalidSequence` if the X values are not all `>= 1` and strictly
    /// ascending, if the source values are not strictly ascending, or if the
    /// source closes before the largest X is reached.
    pub fn apply_ascending_stream<I>(&self, values: I) -> Result<ValueSequence>
    where
        I: IntoIterator<Item = i64>,
    {
        self.apply_indexed_stream(AscendingValues::new(values), Exhaustion::Fail)
    }

    fn verify_stream_positions(&self) -> Result<()> {
        let mut previous = 0;
        for x in self.iter() {
            verify_sequence!(x >= 1, "x value {x} is below 1");
            verify_sequence!(
                x > previous,
                "x value {x} does not exceed previous x value {previous}"
            );
            previous = x;
        }
        Ok(())
    }
}

impl FloatSequence {
    /// Applies `f` to each X value.
    pub fn apply<T, F>(&self, f: F) -> ValueSequence
    where
        T: Element,
        F: FnMut(f64) -> T,
    {
        self.iter().map(f).collect()
    }

    /// Applies the inverse of `f` to each X value: Y is the argument in
    /// `[lower, upper]` at which `f` produces X, found by bisection.
    ///
    /// `f` must be monotone increasing or decreasing on `[lower, upper]`;
    /// otherwise the Y values are unspecified. Each element costs a fixed 55
    /// evaluations of `f`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `upper > lower`.
    pub fn apply_inverse<F>(&self, f: F, lower: f64, upper: f64) -> Result<ValueSequence>
    where
        F: Fn(f64) -> f64,
    {
        let inverse = Inverse::new(f, lower, upper)?;
        Ok(self.iter().map(|x| inverse.at(x)).collect())
    }
}

fn lookup<T: Clone>(table: &[T], x: i64) -> Result<T> {
    usize::try_from(x)
        .ok()
        .and_then(|pos| pos.checked_sub(1))
        .and_then(|idx| table.get(idx))
        .cloned()
        .ok_or_else(|| {
            Error::out_of_range("lookup table", x.saturating_sub(1), table.len() as u64)
        })
}
