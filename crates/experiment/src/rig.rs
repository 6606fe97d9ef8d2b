use adiabat_gas::{Compressor, GasState, Injection};

use crate::{DrawMode, Reading, Record};

/// The three reservoirs of a pump experiment.
///
/// Fields are public; each [`GasState`] still guards its own invariants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rig {
    /// Reservoir the compressor draws from.
    pub intake: GasState,
    /// Reservoir the compressor delivers to.
    pub outlet: GasState,
    /// Chamber that moves gas from the intake to the outlet.
    pub compressor: Compressor,
}

impl Rig {
    /// Creates a rig from its three reservoirs.
    #[must_use]
    pub fn new(intake: GasState, outlet: GasState, compressor: Compressor) -> Self {
        Self {
            intake,
            outlet,
            compressor,
        }
    }

    /// Runs one pump cycle: draw from the intake, then deliver to the outlet.
    pub fn cycle(&mut self, max_energy: f64, draw: DrawMode) -> Injection {
        match draw {
            DrawMode::Passive => self.compressor.draw_from(&mut self.intake),
            DrawMode::OneWay => {
                if !self.compressor.draw_one_way(&mut self.intake).is_open() {
                    log::debug!("intake valve closed");
                }
            }
        }
        self.compressor.powered_inject_to(&mut self.outlet, max_energy)
    }

    /// Reads every reservoir.
    #[must_use]
    pub fn record(&self, cycle: usize) -> Record {
        Record {
            cycle,
            intake: Reading::from(&self.intake),
            outlet: Reading::from(&self.outlet),
            compressor: Reading::from(self.compressor.gas()),
        }
    }
}
