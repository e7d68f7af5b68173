//! Inversion of monotone functions by bisection.

use tabula_common::{Result, verify_arg};

/// Number of halvings performed by [`solve`].
///
/// 53 halvings of the initial half-interval bring the step below the
/// resolution of an `f64` mantissa, so every solve costs exactly 53
/// evaluations of `f` plus the two used to determine direction.
pub const BISECTION_ITERATIONS: u32 = 53;

/// Finds `x` in `[lower, upper]` such that `f(x)` is approximately `target`.
///
/// `f` must be monotone (increasing or decreasing) on the closed interval.
/// The direction is determined once by comparing `f(lower)` and `f(upper)`.
/// Starting from the midpoint, each of the [`BISECTION_ITERATIONS`] rounds
/// halves the step and moves `x` toward the side where the residual
/// `f(x) - target` changes sign. An exact hit stops early.
///
/// Targets outside `[f(lower), f(upper)]` resolve to the nearer bound. If `f`
/// is not monotone on the interval the result is unspecified.
///
/// # Errors
///
/// Returns `InvalidArgument` unless `upper > lower`.
pub fn solve<F>(target: f64, f: F, lower: f64, upper: f64) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    verify_arg!(upper, upper > lower);

    let increasing = f(upper) >= f(lower);
    let mut step = (upper - lower) / 2.0;
    let mut x = lower + step;
    for _ in 0..BISECTION_ITERATIONS {
        step /= 2.0;
        let residual = if increasing {
            f(x) - target
        } else {
            target - f(x)
        };
        if residual < 0.0 {
            x += step;
        } else if residual > 0.0 {
            x -= step;
        } else {
            break;
        }
    }
    let x = x.clamp(lower, upper);
    log::trace!("solve: target={target} -> {x} in [{lower}, {upper}]");
    Ok(x)
}

/// A monotone function bound to the interval it is inverted over.
#[derive(Clone, Copy)]
pub struct Inverse<F> {
    f: F,
    lower: f64,
    upper: f64,
}

impl<F> Inverse<F>
where
    F: Fn(f64) -> f64,
{
    /// Binds `f` to `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `upper > lower`.
    pub fn new(f: F, lower: f64, upper: f64) -> Result<Inverse<F>> {
        verify_arg!(upper, upper > lower);
        Ok(Inverse { f, lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the argument of `f` that produces `target`.
    pub fn at(&self, target: f64) -> f64 {
        // Bounds were validated in `new`.
        solve(target, &self.f, self.lower, self.upper).unwrap_or(self.lower)
    }
}
