//! Newton–Raphson method for scalar equations.
//!
//! Starting from `x0`, each iteration evaluates `f(x)` and stops if
//! `|f(x)| < tolerance`. Otherwise it evaluates `f'(x)` and steps to
//! `x - f(x) / f'(x)`.
//!
//! The method reports [`SolveResult::Diverged`] instead of a root when:
//!
//! - the derivative is exactly zero ([`Divergence::ZeroDerivative`]), checked
//!   on every iteration so a flat start fails immediately;
//! - `f` or `f'` evaluates to NaN ([`Divergence::NotANumber`]);
//! - the iteration cap runs out ([`Divergence::MaxIters`]);
//! - an observer returns [`Action::StopEarly`]
//!   ([`Divergence::StoppedByObserver`]).
//!
//! When no analytic derivative is available, pass a
//! [`CentralDifference`](abaco_core::calculus::CentralDifference) of `f`.

mod config;
mod event;

pub use config::Config;
pub use event::Event;

use abaco_core::{Observer, ScalarFunction};
use tracing::{debug, trace};

use crate::equation::{Divergence, Error, Root, SolveResult, Status, evaluate::evaluate};

/// Control actions supported by the Newton–Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver before taking the current step.
    StopEarly,
}

/// Finds a root of `f` from the initial guess `x0`, given its derivative `df`.
///
/// `f` and `df` are each evaluated at most `config.max_iters()` times.
/// [`Root::iters`] counts the Newton steps taken before convergence.
///
/// # Errors
///
/// Returns [`Error::Function`] if any evaluation of `f` or `df` fails. The
/// solve stops at the first failure.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<SolveResult, Error>
where
    F: ScalarFunction + ?Sized,
    D: ScalarFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    let tolerance = config.tolerance();
    let mut x = x0;

    for iter in 1..=config.max_iters() {
        let fx = evaluate(f, x)?;
        if fx.is_nan() {
            return Ok(diverged(iter, Divergence::NotANumber { x }));
        }
        if tolerance.is_met_by(fx) {
            debug!(iters = iter - 1, x, fx, "newton: converged");
            return Ok(SolveResult::RootFound(Root {
                x,
                iters: iter - 1,
                status: Status::Converged,
            }));
        }

        let dfx = evaluate(df, x)?;
        if dfx.is_nan() {
            return Ok(diverged(iter, Divergence::NotANumber { x }));
        }
        #[allow(clippy::float_cmp)]
        if dfx == 0.0 {
            return Ok(diverged(iter, Divergence::ZeroDerivative { x }));
        }

        let event = Event { iter, x, fx, dfx };
        trace!(iter, x, fx, dfx, "newton iteration");

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(diverged(iter, Divergence::StoppedByObserver { x }));
                }
            }
        }

        x += event.step();
    }

    Ok(diverged(config.max_iters(), Divergence::MaxIters { x }))
}

/// Runs Newton–Raphson without observation.
///
/// # Errors
///
/// Returns [`Error::Function`] if any evaluation of `f` or `df` fails.
pub fn solve_unobserved<F, D>(
    f: &F,
    df: &D,
    x0: f64,
    config: &Config,
) -> Result<SolveResult, Error>
where
    F: ScalarFunction + ?Sized,
    D: ScalarFunction + ?Sized,
{
    solve(f, df, x0, config, ())
}

fn diverged(iter: usize, reason: Divergence) -> SolveResult {
    debug!(iter, x = reason.x(), ?reason, "newton: diverged");
    SolveResult::Diverged(reason)
}
