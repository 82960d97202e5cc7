use std::error::Error as StdError;

use thiserror::Error;

/// Errors that abort a solve.
///
/// Reported numeric outcomes (no bracket, divergence) are not errors; see
/// [`SolveResult`](super::SolveResult).
#[derive(Debug, Error)]
pub enum Error {
    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

/// Errors that can occur when building a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}
