//! Solvers for scalar equations — finding `x` such that `f(x) = 0`.
//!
//! Every solver returns `Result<SolveResult, Error>`. The `Err` side is
//! reserved for failures of the caller's function; numeric outcomes such as
//! an unbracketed interval or a vanishing derivative are reported through
//! [`SolveResult`] so callers can match on them exhaustively.
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on a bracketed interval, with an
//!   optional per-iteration trace
//! - [`newton`] — quadratic convergence from a good initial guess, given the
//!   derivative

mod error;
mod evaluate;
mod outcome;
mod tolerance;

pub use error::{ConfigError, Error};
pub use outcome::{Divergence, IterationRecord, Root, SolveResult, Status, Trace};
pub use tolerance::Tolerance;

pub mod bisection;
pub mod newton;
