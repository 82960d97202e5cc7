use crate::equation::IterationRecord;

/// Current bracket ends and the function values there.
///
/// `lo` starts at `a` and `hi` at `b`, in the order supplied; nothing
/// requires `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    lo: f64,
    hi: f64,
    flo: f64,
}

impl Bracket {
    /// Creates a bracket from `[a, b]` and `f(a)`.
    pub(super) fn new(a: f64, b: f64, fa: f64) -> Self {
        Self {
            lo: a,
            hi: b,
            flo: fa,
        }
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    /// Captures the bracket with an evaluated midpoint.
    pub(super) fn record(&self, mid: f64, fmid: f64) -> IterationRecord {
        IterationRecord {
            lo: self.lo,
            hi: self.hi,
            mid,
            fmid,
        }
    }

    /// Replaces one end with `mid`.
    ///
    /// A negative `f(lo) * f(mid)` puts the root in `[lo, mid]`, so `hi`
    /// moves. Anything else, including a zero product, moves `lo`.
    pub(super) fn shrink(&mut self, mid: f64, fmid: f64) {
        if self.flo * fmid < 0.0 {
            self.hi = mid;
        } else {
            self.lo = mid;
            self.flo = fmid;
        }
    }
}
