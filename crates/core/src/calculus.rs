//! Numeric differentiation and integration.
//!
//! These are plain approximations with no error control. Non-finite values
//! produced by the function propagate into the result unchanged; only errors
//! returned by a fallible [`ScalarFunction`] are reported.

use std::num::NonZeroUsize;

use crate::ScalarFunction;

/// Default step for [`diff`] and [`CentralDifference::with_default_step`].
pub const DEFAULT_STEP: f64 = 1e-4;

/// Default number of sub-intervals for [`nint`].
pub const DEFAULT_INTERVALS: NonZeroUsize = match NonZeroUsize::new(500) {
    Some(n) => n,
    None => unreachable!(),
};

/// Estimates `f'(x)` with the central difference `(f(x + h) - f(x - h)) / 2h`.
///
/// # Errors
///
/// Returns the function's error if either evaluation fails.
pub fn diff<F>(f: &F, x: f64, h: f64) -> Result<f64, F::Error>
where
    F: ScalarFunction + ?Sized,
{
    let forward = f.call(x + h)?;
    let backward = f.call(x - h)?;
    Ok((forward - backward) / (2.0 * h))
}

/// Integrates `f` from `a` to `b` with the composite trapezoidal rule on `n`
/// equal sub-intervals.
///
/// Swapping `a` and `b` flips the sign of the result.
///
/// # Errors
///
/// Returns the function's error if any evaluation fails.
#[allow(clippy::cast_precision_loss)]
pub fn nint<F>(f: &F, a: f64, b: f64, n: NonZeroUsize) -> Result<f64, F::Error>
where
    F: ScalarFunction + ?Sized,
{
    let n = n.get();
    let h = (b - a) / n as f64;

    let mut sum = 0.5 * (f.call(a)? + f.call(b)?);
    for i in 1..n {
        sum += f.call(a + i as f64 * h)?;
    }

    Ok(sum * h)
}

/// The central-difference derivative of a borrowed function.
///
/// Evaluating a `CentralDifference` at `x` returns [`diff`] of the wrapped
/// function at `x`. Use it to hand a numeric derivative to a solver that
/// expects `df` as a [`ScalarFunction`].
pub struct CentralDifference<'a, F: ?Sized> {
    f: &'a F,
    h: f64,
}

impl<'a, F> CentralDifference<'a, F>
where
    F: ScalarFunction + ?Sized,
{
    /// Creates the derivative of `f` using step `h`.
    pub fn new(f: &'a F, h: f64) -> Self {
        Self { f, h }
    }

    /// Creates the derivative of `f` using [`DEFAULT_STEP`].
    pub fn with_default_step(f: &'a F) -> Self {
        Self::new(f, DEFAULT_STEP)
    }
}

impl<F> ScalarFunction for CentralDifference<'_, F>
where
    F: ScalarFunction + ?Sized,
{
    type Error = F::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        diff(self.f, x, self.h)
    }
}
