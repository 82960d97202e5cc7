/// How a solver arrived at its reported root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit; the root is a best-effort estimate.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// A root estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    /// The estimate of `x` where `f(x) = 0`.
    pub x: f64,

    /// Iterations completed when the solver finished.
    pub iters: usize,

    /// Final solver status.
    pub status: Status,
}

/// Snapshot of one bisection iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord {
    /// Bracket end on the `a` side.
    pub lo: f64,

    /// Bracket end on the `b` side.
    pub hi: f64,

    /// Midpoint evaluated this iteration.
    pub mid: f64,

    /// Function value at `mid`.
    pub fmid: f64,
}

impl IterationRecord {
    /// Returns half the bracket width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        0.5 * (self.hi - self.lo).abs()
    }
}

/// Per-iteration records of a traced solve together with its final root.
///
/// The number of records equals the iterations executed; it reaches the
/// configured cap only when the solver ran out of iterations.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// One record per iteration, in order.
    pub records: Vec<IterationRecord>,

    /// The root reported when the solve finished.
    pub root: Root,
}

/// Why an iterative method failed to produce a root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Divergence {
    /// The derivative was exactly zero at `x`.
    ZeroDerivative { x: f64 },

    /// The iteration limit was reached without meeting the tolerance.
    MaxIters { x: f64 },

    /// The function (or derivative) evaluated to NaN at `x`.
    NotANumber { x: f64 },

    /// An observer stopped the solver at `x`.
    StoppedByObserver { x: f64 },
}

impl Divergence {
    /// Returns the iterate at which the method gave up.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Divergence::ZeroDerivative { x }
            | Divergence::MaxIters { x }
            | Divergence::NotANumber { x }
            | Divergence::StoppedByObserver { x } => *x,
        }
    }
}

/// The outcome of a solve call.
///
/// Exactly one variant is produced per call. `Trace` replaces `RootFound`
/// when the solver runs in trace mode.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveResult {
    /// A root estimate.
    RootFound(Root),

    /// The method failed to converge.
    Diverged(Divergence),

    /// `f(a)` and `f(b)` have the same sign (or one is NaN).
    NotBracketed { a: f64, b: f64, fa: f64, fb: f64 },

    /// The per-iteration trace and the root it led to.
    Trace(Trace),
}

impl SolveResult {
    /// Returns the root estimate, if the solve produced one.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        match self {
            SolveResult::RootFound(root) | SolveResult::Trace(Trace { root, .. }) => Some(root.x),
            SolveResult::Diverged(_) | SolveResult::NotBracketed { .. } => None,
        }
    }

    /// Returns the iteration records, if the solve ran in trace mode.
    #[must_use]
    pub fn records(&self) -> Option<&[IterationRecord]> {
        match self {
            SolveResult::Trace(trace) => Some(&trace.records),
            _ => None,
        }
    }

    /// Returns true if the solve met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        match self {
            SolveResult::RootFound(root) | SolveResult::Trace(Trace { root, .. }) => {
                root.status == Status::Converged
            }
            SolveResult::Diverged(_) | SolveResult::NotBracketed { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn root(status: Status) -> Root {
        Root {
            x: 1.5,
            iters: 3,
            status,
        }
    }

    #[test]
    fn root_found_and_trace_expose_root() {
        let found = SolveResult::RootFound(root(Status::Converged));
        assert_eq!(found.root(), Some(1.5));
        assert!(found.records().is_none());
        assert!(found.is_converged());

        let record = IterationRecord {
            lo: 1.0,
            hi: 2.0,
            mid: 1.5,
            fmid: 0.0,
        };
        let traced = SolveResult::Trace(Trace {
            records: vec![record],
            root: root(Status::MaxIters),
        });
        assert_eq!(traced.root(), Some(1.5));
        assert_eq!(traced.records(), Some(&[record][..]));
        assert!(!traced.is_converged());
    }

    #[test]
    fn failures_have_no_root() {
        let diverged = SolveResult::Diverged(Divergence::ZeroDerivative { x: 2.0 });
        assert_eq!(diverged.root(), None);
        assert!(!diverged.is_converged());

        let unbracketed = SolveResult::NotBracketed {
            a: 0.0,
            b: 1.0,
            fa: 1.0,
            fb: 2.0,
        };
        assert_eq!(unbracketed.root(), None);
    }

    #[test]
    fn divergence_reports_iterate() {
        assert_relative_eq!(Divergence::MaxIters { x: -4.0 }.x(), -4.0);
        assert_relative_eq!(Divergence::NotANumber { x: 0.5 }.x(), 0.5);
    }

    #[test]
    fn half_width_ignores_orientation() {
        let record = IterationRecord {
            lo: 3.0,
            hi: 1.0,
            mid: 2.0,
            fmid: 0.1,
        };
        assert_relative_eq!(record.half_width(), 1.0);
    }
}
