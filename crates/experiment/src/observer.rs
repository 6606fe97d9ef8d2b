use crate::run::{Action, Event};

/// Receives events from a running experiment and optionally returns a
/// control action.
///
/// Implemented for `()`, which ignores every event, and for any closure of
/// the form `FnMut(&E) -> Option<A>`.
pub trait Observer<E, A> {
    /// Observes an event, returning an action to take or `None` to continue.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Stops a run once the intake pressure falls below a threshold.
///
/// Useful for pump-down experiments where the cycle count needed to reach a
/// target vacuum is the quantity of interest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopBelow {
    /// Intake pressure in Pa below which the run stops.
    pub pressure: f64,
}

impl Observer<Event, Action> for StopBelow {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (event.record.intake.pressure < self.pressure).then_some(Action::StopEarly)
    }
}
