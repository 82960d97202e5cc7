use crate::equation::{ConfigError, Tolerance, tolerance::validate_max_iters};

/// Configuration for the Newton–Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: Tolerance,
    max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            max_iters: 20,
        }
    }
}

impl Config {
    /// Creates a new config with validated limits.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            tolerance: Tolerance::new(tolerance)?,
            max_iters: validate_max_iters(max_iters)?,
        })
    }

    /// Returns the convergence tolerance on `|f(x)|`.
    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
