//! The observed pump-cycle loop.
//!
//! Each cycle draws from the intake, delivers to the outlet, and records every
//! reservoir:
//!
//! ```text
//! draw(intake → compressor) → powered_inject(compressor → outlet) → record
//! ```
//!
//! # Example
//!
//! ```
//! use adiabat_experiment::{ExperimentConfig, run::{self, Action, Event}};
//!
//! let config = ExperimentConfig::default();
//!
//! // Stop once half of the intake gas is gone.
//! let observer = |event: &Event| (event.record.intake.moles < 2.5).then_some(Action::StopEarly);
//!
//! let solution = run::run(config.rig()?, &config.settings(), observer)?;
//! assert_eq!(solution.status, run::Status::StoppedByObserver);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use crate::{DrawMode, Observer, Record, Rig};

/// Parameters of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Number of pump cycles to run.
    pub cycles: usize,
    /// Work available to each delivery stroke, in J.
    pub max_energy: f64,
    /// How the compressor draws from the intake.
    pub draw: DrawMode,
}

/// Runs a pump experiment.
///
/// # Algorithm
///
/// 1. Record the initial state as cycle 0.
/// 2. For each cycle:
///    - Draw from the intake into the compressor.
///    - Deliver from the compressor into the outlet.
///    - Record every reservoir and check that the readings are physical.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 3. Return the solution with the full history and the final rig.
///
/// # Errors
///
/// Returns [`Error::InvariantViolated`] if any reading is non-finite or has
/// negative moles.
pub fn run<Obs>(mut rig: Rig, settings: &Settings, mut observer: Obs) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    log::info!(
        "running {} cycles at {} J per cycle ({:?} draw)",
        settings.cycles,
        settings.max_energy,
        settings.draw
    );

    let initial = rig.record(0);
    check(&initial)?;

    let mut history = Vec::with_capacity(settings.cycles + 1);
    history.push(initial);

    let event = Event {
        cycle: 0,
        record: initial,
        injection: None,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution::new(Status::StoppedByObserver, history, 0, rig));
    }

    for cycle in 1..=settings.cycles {
        let injection = rig.cycle(settings.max_energy, settings.draw);
        let record = rig.record(cycle);
        check(&record)?;

        log::debug!(
            "cycle {cycle}: intake {:.3} Pa, outlet {:.3} Pa, delivered {:.6} mol",
            record.intake.pressure,
            record.outlet.pressure,
            injection.delivered
        );

        history.push(record);

        let event = Event {
            cycle,
            record,
            injection: Some(injection),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            log::info!("stopped by observer after {cycle} cycles");
            return Ok(Solution::new(Status::StoppedByObserver, history, cycle, rig));
        }
    }

    log::info!("completed {} cycles", settings.cycles);
    Ok(Solution::new(Status::Complete, history, settings.cycles, rig))
}

/// Runs a pump experiment without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`run`].
pub fn run_unobserved(rig: Rig, settings: &Settings) -> Result<Solution, Error> {
    run(rig, settings, ())
}

/// Checks that every reading in a record is physically possible.
pub(crate) fn check(record: &Record) -> Result<(), Error> {
    for (reservoir, reading) in record.readings() {
        let quantities = [
            ("moles", reading.moles),
            ("pressure", reading.pressure),
            ("temperature", reading.temperature),
        ];
        for (quantity, value) in quantities {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::InvariantViolated {
                    cycle: record.cycle,
                    reservoir,
                    quantity,
                    value,
                });
            }
        }
    }
    Ok(())
}
