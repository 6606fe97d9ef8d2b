/// Errors that can occur during a run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A reading came out negative or non-finite.
    ///
    /// The gas operations are built to make this impossible, so it indicates
    /// a logic error rather than a bad input.
    #[error("cycle {cycle}: {reservoir} {quantity} is unphysical ({value})")]
    InvariantViolated {
        cycle: usize,
        reservoir: &'static str,
        quantity: &'static str,
        value: f64,
    },
}
