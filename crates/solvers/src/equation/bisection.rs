//! Bisection method for scalar equations.
//!
//! # Algorithm
//!
//! Bisection keeps an interval `[lo, hi]` whose ends have function values of
//! opposite sign, evaluates the midpoint, and replaces whichever end has the
//! same sign as the midpoint. For a continuous function the interval always
//! contains a root.
//!
//! The solver stops as soon as `|f(mid)| < tolerance` or the half-width
//! `|hi - lo| / 2` drops below the tolerance. When the iteration cap is hit
//! first, the midpoint of the final interval is reported with
//! [`Status::MaxIters`].
//!
//! The sign change is checked once, at entry. An interval whose ends give
//! values of the same sign (or NaN) is reported as
//! [`SolveResult::NotBracketed`] after two evaluations. An end whose value
//! already meets the tolerance is returned as the root with zero iterations,
//! so no records are produced in trace mode. Without this check an exact zero
//! at `a` would give a zero product and the update would move away from it.
//!
//! # Bracket update
//!
//! Each iteration moves `hi` to `mid` when `f(lo) * f(mid) < 0` and moves `lo`
//! otherwise. A zero product therefore shrinks from the low side. Because the
//! tolerance is strictly positive, an exact zero at the midpoint ends the
//! solve before the update runs.
//!
//! # Trace mode
//!
//! With [`Config::traced`], the solver returns [`SolveResult::Trace`]: one
//! [`IterationRecord`](crate::equation::IterationRecord) per iteration, plus
//! the final [`Root`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the midpoint is
//! evaluated and before the convergence check. Observers can return
//! [`Action::StopEarly`] to end the solve at that midpoint with
//! [`Status::StoppedByObserver`].

mod action;
mod bracket;
mod config;
mod event;
mod tracker;


pub use action::Action;
pub use config::Config;
pub use event::Event;

use abaco_core::{Observer, ScalarFunction};
use tracing::{debug, trace};

use crate::equation::{Divergence, Error, Root, SolveResult, Status, evaluate::evaluate};

use bracket::Bracket;
use tracker::Tracker;

/// Finds a root of `f` inside `bracket` using the bisection method.
///
/// The ends `[a, b]` may be given in either order. The observer receives an
/// [`Event`] for every iteration; see the [module docs](self).
///
/// `f` is evaluated at most `2 + config.max_iters()` times.
///
/// # Errors
///
/// Returns [`Error::Function`] if any evaluation of `f` fails. The solve stops
/// at the first failure.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<SolveResult, Error>
where
    F: ScalarFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    let [a, b] = bracket;
    let tolerance = config.tolerance();

    let fa = evaluate(f, a)?;
    let fb = evaluate(f, b)?;

    if fa.is_nan() || fb.is_nan() || fa * fb > 0.0 {
        debug!(a, b, fa, fb, "bisection: interval does not bracket a root");
        return Ok(SolveResult::NotBracketed { a, b, fa, fb });
    }

    let mut tracker = Tracker::new(config.is_traced());

    for (x, fx) in [(a, fa), (b, fb)] {
        if tolerance.is_met_by(fx) {
            debug!(x, fx, "bisection: bracket end is a root");
            return Ok(tracker.finish(Root {
                x,
                iters: 0,
                status: Status::Converged,
            }));
        }
    }

    let mut bracket = Bracket::new(a, b, fa);

    for iter in 1..=config.max_iters() {
        let mid = bracket.midpoint();
        let fmid = evaluate(f, mid)?;

        if fmid.is_nan() {
            debug!(iter, x = mid, "bisection: function returned NaN");
            return Ok(SolveResult::Diverged(Divergence::NotANumber { x: mid }));
        }

        let record = bracket.record(mid, fmid);
        trace!(iter, lo = record.lo, hi = record.hi, mid, fmid, "bisection iteration");
        tracker.push(record);

        if let Some(action) = observer.observe(&Event { iter, record }) {
            match action {
                Action::StopEarly => {
                    debug!(iter, x = mid, "bisection: stopped by observer");
                    return Ok(tracker.finish(Root {
                        x: mid,
                        iters: iter,
                        status: Status::StoppedByObserver,
                    }));
                }
            }
        }

        if tolerance.is_met_by(fmid) || record.half_width() < tolerance.value() {
            debug!(iter, x = mid, fmid, "bisection: converged");
            return Ok(tracker.finish(Root {
                x: mid,
                iters: iter,
                status: Status::Converged,
            }));
        }

        bracket.shrink(mid, fmid);
    }

    let x = bracket.midpoint();
    debug!(iters = config.max_iters(), x, "bisection: iteration limit reached");
    Ok(tracker.finish(Root {
        x,
        iters: config.max_iters(),
        status: Status::MaxIters,
    }))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns [`Error::Function`] if any evaluation of `f` fails.
pub fn solve_unobserved<F>(f: &F, bracket: [f64; 2], config: &Config) -> Result<SolveResult, Error>
where
    F: ScalarFunction + ?Sized,
{
    solve(f, bracket, config, ())
}
