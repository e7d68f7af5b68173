//! Ordered, single-pass value streams and positional access into them.
//!
//! A producer is pulled at most once per value, so callers must request
//! positions in strictly ascending order. [`Nth`] enforces that contract and
//! implements the two policies for a producer that runs dry before a
//! requested position (see [`Exhaustion`]).

use num_traits::Zero;
use tabula_common::{Result, error::Error, verify_sequence};

/// A producer of `(index, value)` pairs with strictly ascending, 1-based
/// indices.
///
/// `Ok(None)` signals exhaustion; once returned, the stream is not pulled
/// again by [`Nth`].
pub trait IndexedStream {
    type Item;

    /// Pulls the next pair. May block while waiting on the producer.
    fn next_indexed(&mut self) -> Result<Option<(u64, Self::Item)>>;
}

/// Numbers the values of a plain iterator 1, 2, 3, ...
pub struct Enumerated<I> {
    inner: I,
    position: u64,
}

impl<I: Iterator> Enumerated<I> {
    pub fn new<T>(values: T) -> Enumerated<I>
    where
        T: IntoIterator<IntoIter = I>,
    {
        Enumerated {
            inner: values.into_iter(),
            position: 0,
        }
    }
}

impl<I: Iterator> IndexedStream for Enumerated<I> {
    type Item = I::Item;

    fn next_indexed(&mut self) -> Result<Option<(u64, I::Item)>> {
        Ok(self.inner.next().map(|value| {
            self.position += 1;
            (self.position, value)
        }))
    }
}

/// Numbers the values of an integer source 1, 2, 3, ... and requires the
/// values themselves to be strictly increasing.
///
/// This is the adapter for channel-fed producers (for example a
/// `std::sync::mpsc::Receiver<i64>`, whose iterator blocks on `recv` and ends
/// when every sender is dropped).
pub struct AscendingValues<I> {
    inner: I,
    position: u64,
    last: Option<i64>,
}

impl<I: Iterator<Item = i64>> AscendingValues<I> {
    pub fn new<T>(values: T) -> AscendingValues<I>
    where
        T: IntoIterator<IntoIter = I>,
    {
        AscendingValues {
            inner: values.into_iter(),
            position: 0,
            last: None,
        }
    }

    /// The last value received from the source, if any.
    pub fn last(&self) -> Option<i64> {
        self.last
    }
}

impl<I: Iterator<Item = i64>> IndexedStream for AscendingValues<I> {
    type Item = i64;

    fn next_indexed(&mut self) -> Result<Option<(u64, i64)>> {
        let Some(value) = self.inner.next() else {
            return Ok(None);
        };
        self.position += 1;
        if let Some(last) = self.last {
            verify_sequence!(
                value > last,
                "stream value {value} at position {} does not exceed {last}",
                self.position
            );
        }
        self.last = Some(value);
        Ok(Some((self.position, value)))
    }
}

/// What [`Nth`] yields for a position the producer never supplies, either
/// because it ran dry first or because a sparse producer skipped it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Exhaustion {
    /// Yield the element type's zero.
    #[default]
    ZeroFill,
    /// Fail with `InvalidSequence`.
    Fail,
}

/// Positional access into an [`IndexedStream`] for strictly ascending
/// positions.
pub struct Nth<S: IndexedStream> {
    stream: S,
    exhaustion: Exhaustion,
    pending: Option<(u64, S::Item)>,
    last_position: u64,
    last_index: u64,
    exhausted: bool,
}

impl<S> Nth<S>
where
    S: IndexedStream,
    S::Item: Zero,
{
    pub fn new(stream: S, exhaustion: Exhaustion) -> Nth<S> {
        Nth {
            stream,
            exhaustion,
            pending: None,
            last_position: 0,
            last_index: 0,
            exhausted: false,
        }
    }

    pub fn exhaustion(&self) -> Exhaustion {
        self.exhaustion
    }

    /// Returns the value at 1-based `position`.
    ///
    /// Values with a lower index are pulled and discarded. A value whose
    /// index overshoots `position` is retained for the next request.
    ///
    /// # Errors
    ///
    /// `InvalidSequence` if `position` is 0 or does not exceed the previously
    /// requested position, if the producer breaks its own ordering, or if the
    /// value is missing under [`Exhaustion::Fail`].
    pub fn nth(&mut self, position: u64) -> Result<S::Item> {
        verify_sequence!(position >= 1, "position {position} is below 1");
        verify_sequence!(
            position > self.last_position,
            "position {position} does not exceed previous position {}",
            self.last_position
        );
        self.last_position = position;

        loop {
            let (index, value) = match self.pending.take() {
                Some(item) => item,
                None => match self.pull()? {
                    Some(item) => item,
                    None => return self.missing(position, "stream exhausted"),
                },
            };
            if index < position {
                continue;
            }
            if index == position {
                return Ok(value);
            }
            self.pending = Some((index, value));
            return self.missing(position, "stream skipped it");
        }
    }

    pub fn into_inner(self) -> S {
        self.stream
    }

    fn pull(&mut self) -> Result<Option<(u64, S::Item)>> {
        if self.exhausted {
            return Ok(None);
        }
        match self.stream.next_indexed()? {
            Some((index, value)) => {
                verify_sequence!(
                    index > self.last_index,
                    "stream index {index} does not exceed {}",
                    self.last_index
                );
                self.last_index = index;
                Ok(Some((index, value)))
            }
            None => {
                log::debug!("stream exhausted after index {}", self.last_index);
                self.exhausted = true;
                Ok(None)
            }
        }
    }

    fn missing(&self, position: u64, reason: &str) -> Result<S::Item> {
        match self.exhaustion {
            Exhaustion::ZeroFill => Ok(S::Item::zero()),
            Exhaustion::Fail => Err(Error::invalid_sequence(format!(
                "no value at position {position}: {reason}"
            ))),
        }
    }
}
