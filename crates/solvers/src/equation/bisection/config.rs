use crate::equation::{ConfigError, Tolerance, tolerance::validate_max_iters};

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: Tolerance,
    max_iters: usize,
    trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            max_iters: 50,
            trace: false,
        }
    }
}

impl Config {
    /// Creates a new config in value mode.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            tolerance: Tolerance::new(tolerance)?,
            max_iters: validate_max_iters(max_iters)?,
            trace: false,
        })
    }

    /// Returns this config with trace mode enabled.
    ///
    /// In trace mode the solver returns [`SolveResult::Trace`] instead of
    /// [`SolveResult::RootFound`].
    ///
    /// [`SolveResult::Trace`]: crate::equation::SolveResult::Trace
    /// [`SolveResult::RootFound`]: crate::equation::SolveResult::RootFound
    #[must_use]
    pub fn traced(self) -> Self {
        Self {
            trace: true,
            ..self
        }
    }

    /// Returns the convergence tolerance on `|f(mid)|` and the bracket half-width.
    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Returns the maximum number of bisection iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns true if trace mode is enabled.
    #[must_use]
    pub fn is_traced(&self) -> bool {
        self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_relative_eq!(config.tolerance().value(), 1e-6);
        assert_eq!(config.max_iters(), 50);
        assert!(!config.is_traced());
    }

    #[test]
    fn traced_keeps_limits() {
        let config = Config::new(1e-3, 7).expect("valid").traced();
        assert_relative_eq!(config.tolerance().value(), 1e-3);
        assert_eq!(config.max_iters(), 7);
        assert!(config.is_traced());
    }

    #[test]
    fn rejects_invalid_limits() {
        assert_eq!(Config::new(0.0, 10), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(f64::NAN, 10), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(1e-6, 0), Err(ConfigError::MaxIters));
    }
}
