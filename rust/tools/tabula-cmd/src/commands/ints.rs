//! Ints command implementation

use anyhow::Result;
use clap::ValueEnum;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use tabula_sequence::{IntSequence, ValueSequence};

use crate::commands::{TableArgs, print_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IntFunction {
    /// x * x
    Square,
    /// x * x * x
    Cube,
    /// x!, with x! = 1 for x < 2
    Factorial,
    /// The x-th Fibonacci number, with fib(x) = 0 for x < 1
    Fib,
}

impl IntFunction {
    pub fn tabulate(self, xs: &IntSequence) -> ValueSequence {
        match self {
            IntFunction::Square => xs.apply(|x| x.wrapping_mul(x)),
            IntFunction::Cube => xs.apply(|x| x.wrapping_mul(x).wrapping_mul(x)),
            IntFunction::Factorial => xs.apply(factorial),
            IntFunction::Fib => xs.apply(fibonacci),
        }
    }
}

pub fn run(
    start: i64,
    inc: i64,
    count: usize,
    function: IntFunction,
    table: TableArgs,
) -> Result<()> {
    let xs = IntSequence::new(start, inc, count);
    log::debug!("ints: {function:?} over {count} values from {start} step {inc}");
    let ys = function.tabulate(&xs);
    print_table(&xs, &ys, &table)
}

fn factorial(x: i64) -> BigInt {
    (2..=x).fold(BigInt::one(), |acc, k| acc * k)
}

fn fibonacci(x: i64) -> BigInt {
    let mut a = BigInt::zero();
    let mut b = BigInt::one();
    for _ in 0..x.max(0) {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    a
}
