//! Deterministic producers for stream-consumption tests.

use std::sync::mpsc;
use std::thread;

use num_bigint::BigInt;

/// `start, start + incr, ...`, optionally stopping once a value would
/// exceed `max`.
#[derive(Debug, Clone)]
pub struct LinearInts {
    next: i64,
    incr: i64,
    max: Option<i64>,
}

impl LinearInts {
    pub fn new(start: i64, incr: i64) -> LinearInts {
        LinearInts {
            next: start,
            incr,
            max: None,
        }
    }

    pub fn up_to(mut self, max: i64) -> LinearInts {
        self.max = Some(max);
        self
    }
}

impl Iterator for LinearInts {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.max.is_some_and(|max| self.next > max) {
            return None;
        }
        let value = self.next;
        self.next += self.incr;
        Some(value)
    }
}

/// Unbounded `start, start + incr, ...` as big integers.
#[derive(Debug, Clone)]
pub struct LinearBigInts {
    next: BigInt,
    incr: BigInt,
}

impl LinearBigInts {
    pub fn new(start: i64, incr: i64) -> LinearBigInts {
        LinearBigInts {
            next: BigInt::from(start),
            incr: BigInt::from(incr),
        }
    }
}

impl Iterator for LinearBigInts {
    type Item = BigInt;

    fn next(&mut self) -> Option<BigInt> {
        let value = self.next.clone();
        self.next += &self.incr;
        Some(value)
    }
}

/// Sends `values` from a background thread over a bounded channel and
/// closes it. The receiver blocks until each value arrives.
pub fn spawn_producer(values: Vec<i64>) -> mpsc::Receiver<i64> {
    let (tx, rx) = mpsc::sync_channel(1);
    thread::spawn(move || {
        for value in values {
            if tx.send(value).is_err() {
                break;
            }
        }
    });
    rx
}
