use adiabat_gas::Injection;

use crate::Record;

/// Event emitted by a run for each recorded cycle.
///
/// Cycle 0 is the initial state before any pumping.
/// Cycles 1..N are emitted after each pump cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The cycle number (0 for initial, 1..N for pump cycles).
    pub cycle: usize,

    /// Readings of every reservoir at this cycle.
    pub record: Record,

    /// The delivery stroke of this cycle, or `None` for the initial state.
    pub injection: Option<Injection>,
}
