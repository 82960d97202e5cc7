use super::ConfigError;

/// A finite, strictly positive convergence threshold.
///
/// A value `v` meets the tolerance when `|v| < tolerance`; equality does not
/// count.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Creates a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tolerance`] if `value` is not finite or not
    /// positive.
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        Ok(Self(value))
    }

    /// Returns the threshold.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if `|value| < tolerance`.
    ///
    /// NaN never meets the tolerance.
    #[must_use]
    pub fn is_met_by(self, value: f64) -> bool {
        value.abs() < self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(1e-6)
    }
}

/// Checks that an iteration cap allows at least one iteration.
pub(crate) fn validate_max_iters(max_iters: usize) -> Result<usize, ConfigError> {
    if max_iters == 0 {
        return Err(ConfigError::MaxIters);
    }
    Ok(max_iters)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_is_one_micro() {
        assert_relative_eq!(Tolerance::default().value(), 1e-6);
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        for value in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
            assert_eq!(Tolerance::new(value), Err(ConfigError::Tolerance));
        }
    }

    #[test]
    fn comparison_is_strict() {
        let tol = Tolerance::new(1e-3).expect("valid");
        assert!(tol.is_met_by(-9e-4));
        assert!(!tol.is_met_by(1e-3));
        assert!(!tol.is_met_by(f64::NAN));
    }

    #[test]
    fn max_iters_must_be_positive() {
        assert_eq!(validate_max_iters(0), Err(ConfigError::MaxIters));
        assert_eq!(validate_max_iters(7), Ok(7));
    }
}
