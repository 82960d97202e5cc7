use crate::equation::{IterationRecord, Root, SolveResult, Trace};

/// Collects iteration records when trace mode is on.
///
/// The `Option` distinguishes value mode (`None`) from trace mode.
pub(super) struct Tracker {
    records: Option<Vec<IterationRecord>>,
}

impl Tracker {
    /// Creates a tracker that keeps records only if `traced` is true.
    pub(super) fn new(traced: bool) -> Self {
        Self {
            records: traced.then(Vec::new),
        }
    }

    /// Appends a record in trace mode; does nothing in value mode.
    pub(super) fn push(&mut self, record: IterationRecord) {
        if let Some(records) = self.records.as_mut() {
            records.push(record);
        }
    }

    /// Wraps the final root as `Trace` or `RootFound` depending on the mode.
    pub(super) fn finish(self, root: Root) -> SolveResult {
        match self.records {
            Some(records) => SolveResult::Trace(Trace { records, root }),
            None => SolveResult::RootFound(root),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::equation::Status;

    fn root() -> Root {
        Root {
            x: 1.0,
            iters: 1,
            status: Status::Converged,
        }
    }

    fn record() -> IterationRecord {
        IterationRecord {
            lo: 0.0,
            hi: 2.0,
            mid: 1.0,
            fmid: 0.0,
        }
    }

    #[test]
    fn value_mode_drops_records() {
        let mut tracker = Tracker::new(false);
        tracker.push(record());

        assert_eq!(tracker.finish(root()), SolveResult::RootFound(root()));
    }

    #[test]
    fn trace_mode_keeps_records() {
        let mut tracker = Tracker::new(true);
        tracker.push(record());

        let result = tracker.finish(root());
        assert_eq!(result.records(), Some(&[record()][..]));
        assert_eq!(result.root(), Some(1.0));
    }
}
