/// Iteration event emitted by the Newton–Raphson solver.
///
/// Emitted once `f(x)` and `f'(x)` are known and before `x` is updated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Current iterate.
    pub x: f64,

    /// Function value at `x`.
    pub fx: f64,

    /// Derivative value at `x`.
    pub dfx: f64,
}

impl Event {
    /// Returns the Newton step `-f(x) / f'(x)` about to be applied.
    #[must_use]
    pub fn step(&self) -> f64 {
        -self.fx / self.dfx
    }
}
