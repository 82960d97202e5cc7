use std::convert::Infallible;

/// A real-valued function of one real variable.
///
/// Solvers borrow a `ScalarFunction` for the duration of a single call and
/// evaluate it as many times as their iteration budget allows.
/// An evaluation may fail; the solver stops and hands the error back.
///
/// Any `Fn(f64) -> f64` closure is a `ScalarFunction` that never fails.
/// Closures returning `Result<f64, E>` can be wrapped in [`Fallible`].
pub trait ScalarFunction {
    /// The error returned when an evaluation fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Wraps a closure that returns `Result<f64, E>` as a [`ScalarFunction`].
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> ScalarFunction for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("log of non-positive value {0}")]
    struct Domain(f64);

    fn eval<F: ScalarFunction>(f: &F, x: f64) -> Result<f64, F::Error> {
        f.call(x)
    }

    #[test]
    fn closures_never_fail() {
        let square = |x: f64| x * x;
        let y = eval(&square, 3.0).expect("infallible");
        assert_relative_eq!(y, 9.0);
    }

    #[test]
    fn fallible_passes_values_and_errors_through() {
        let log = Fallible(|x: f64| if x > 0.0 { Ok(x.ln()) } else { Err(Domain(x)) });

        assert_relative_eq!(eval(&log, 1.0).expect("in domain"), 0.0);

        let err = eval(&log, -2.0).expect_err("out of domain");
        assert_eq!(err.to_string(), "log of non-positive value -2");
    }
}
