/// Control actions an observer can return during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run early and return the solution so far.
    StopEarly,
}
