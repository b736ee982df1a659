//! Per-run outcome bookkeeping
//!
//! A [`CheckRun`] owns the state of one check cycle: the expected outcome
//! count (fixed before any lookup is dispatched) and the outcomes received
//! so far. Completion is reported exactly once, the moment the received
//! count reaches the expected count, no matter whether outcomes arrive from
//! network completions or immediate classification.

use tracing::error;

use crate::check::outcome::Outcome;

#[derive(Debug)]
pub struct CheckRun {
    expected: usize,
    outcomes: Vec<Outcome>,
    completed: bool,
}

impl CheckRun {
    /// Start a run expecting `expected` outcomes. A zero-item run is
    /// complete from the start; callers must still finalize it.
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            outcomes: Vec::with_capacity(expected),
            completed: expected == 0,
        }
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn received(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_complete(&self) -> bool {
        self.received() >= self.expected
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Record one outcome. Returns true exactly once per run: on the call
    /// that brings the received count up to the expected count.
    ///
    /// Recording beyond the expected count is a bug in the caller; the
    /// outcome is dropped so the finalize-once guarantee holds.
    pub fn record(&mut self, outcome: Outcome) -> bool {
        if self.outcomes.len() >= self.expected {
            error!(
                item = %outcome.item().name,
                expected = self.expected,
                "Outcome recorded after run completion; dropping"
            );
            debug_assert!(false, "outcome recorded after run completion");
            return false;
        }

        self.outcomes.push(outcome);

        if self.outcomes.len() == self.expected && !self.completed {
            self.completed = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::InstalledItem;
    use semver::Version;

    fn item(name: &str) -> InstalledItem {
        InstalledItem {
            name: name.to_string(),
            title: name.to_string(),
            version: Version::new(1, 0, 0),
            resource_id: 1,
            core: false,
        }
    }

    #[test]
    fn record_signals_completion_exactly_once() {
        let mut run = CheckRun::new(3);

        assert!(!run.record(Outcome::UpToDate(item("a"))));
        assert!(!run.record(Outcome::UpToDate(item("b"))));
        assert!(run.record(Outcome::UpToDate(item("c"))));

        assert!(run.is_complete());
        assert_eq!(run.received(), run.expected());
    }

    #[test]
    fn zero_expected_run_is_complete_immediately() {
        let run = CheckRun::new(0);
        assert!(run.is_complete());
        assert_eq!(run.received(), 0);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "after run completion"))]
    fn recording_past_expected_never_signals_again() {
        let mut run = CheckRun::new(1);
        assert!(run.record(Outcome::UpToDate(item("a"))));

        // In release builds the extra outcome is dropped silently (logged);
        // in debug builds this is asserted.
        assert!(!run.record(Outcome::UpToDate(item("b"))));
        assert_eq!(run.received(), 1);
    }
}
