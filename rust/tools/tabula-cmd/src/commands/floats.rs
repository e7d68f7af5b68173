//! Floats command implementation

use anyhow::{Context, Result};
use clap::ValueEnum;
use tabula_sequence::{FloatSequence, ValueSequence};

use crate::commands::{TableArgs, print_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FloatFunction {
    Sqrt,
    Sin,
    Cos,
    /// Natural logarithm
    Ln,
    Exp,
    Square,
}

impl FloatFunction {
    pub fn eval(self, x: f64) -> f64 {
        match self {
            FloatFunction::Sqrt => x.sqrt(),
            FloatFunction::Sin => x.sin(),
            FloatFunction::Cos => x.cos(),
            FloatFunction::Ln => x.ln(),
            FloatFunction::Exp => x.exp(),
            FloatFunction::Square => x * x,
        }
    }

    /// Applies the function to every X, or when `bounds` is given, solves
    /// `f(y) = x` for each X with y searched in `bounds`.
    pub fn tabulate(self, xs: &FloatSequence, bounds: Option<(f64, f64)>) -> Result<ValueSequence> {
        match bounds {
            None => Ok(xs.apply(|x| self.eval(x))),
            Some((lower, upper)) => xs
                .apply_inverse(|y| self.eval(y), lower, upper)
                .with_context(|| format!("Cannot invert {self:?} over [{lower}, {upper}]")),
        }
    }
}

pub fn run(
    start: f64,
    inc: f64,
    count: usize,
    function: FloatFunction,
    bounds: Option<(f64, f64)>,
    table: TableArgs,
) -> Result<()> {
    let xs = FloatSequence::new(start, inc, count);
    log::debug!(
        "floats: {function:?} over {count} values from {start} step {inc}, inverse bounds {bounds:?}"
    );
    let ys = function.tabulate(&xs, bounds)?;
    print_table(&xs, &ys, &table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_testkit::assert_close;

    #[test]
    fn test_apply() {
        let xs = FloatSequence::new(1.0, 1.0, 4);
        let ys = FloatFunction::Square.tabulate(&xs, None).unwrap();
        assert_eq!(ys.as_floats(), Some(&[1.0, 4.0, 9.0, 16.0][..]));
    }

    #[test]
    fn test_inverse() {
        let xs = FloatSequence::new(1.0, 1.0, 4);
        let ys = FloatFunction::Square
            .tabulate(&xs, Some((0.0, 10.0)))
            .unwrap();
        let ys = ys.as_floats().unwrap();
        for (x, y) in xs.iter().zip(ys) {
            assert_close(x.sqrt(), *y);
        }
    }

    #[test]
    fn test_inverse_needs_ordered_bounds() {
        let xs = FloatSequence::new(1.0, 1.0, 4);
        let err = FloatFunction::Exp.tabulate(&xs, Some((3.0, 1.0))).unwrap_err();
        assert!(err.to_string().contains("Cannot invert Exp"));
    }
}
