use crate::{Record, Rig};

/// Indicates how a run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested cycles.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the run terminated.
    pub status: Status,

    /// Records of every cycle, starting with the initial state.
    pub history: Vec<Record>,

    /// Number of pump cycles completed.
    pub cycles: usize,

    /// The reservoirs as they stood at the end of the run.
    pub rig: Rig,
}

impl Solution {
    pub(crate) fn new(status: Status, history: Vec<Record>, cycles: usize, rig: Rig) -> Self {
        debug_assert!(!history.is_empty(), "history always holds the initial record");
        Self {
            status,
            history,
            cycles,
            rig,
        }
    }

    /// Returns the initial record.
    #[must_use]
    pub fn first(&self) -> &Record {
        &self.history[0]
    }

    /// Returns the record of the last completed cycle.
    #[must_use]
    pub fn last(&self) -> &Record {
        &self.history[self.history.len() - 1]
    }
}
