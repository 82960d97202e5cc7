use crate::equation::IterationRecord;

/// Iteration event emitted by the bisection solver.
///
/// Emitted after the midpoint is evaluated and before the convergence check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Bracket, midpoint and midpoint value for this iteration.
    pub record: IterationRecord,
}
