use adiabat_gas::GasState;

/// Observable quantities of a single reservoir.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Pressure in Pa.
    pub pressure: f64,
    /// Amount of gas in mol.
    pub moles: f64,
    /// Absolute temperature in K.
    pub temperature: f64,
}

impl From<&GasState> for Reading {
    fn from(state: &GasState) -> Self {
        Self {
            pressure: state.pressure(),
            moles: state.moles(),
            temperature: state.temperature(),
        }
    }
}

/// Readings of every reservoir after a cycle.
///
/// Cycle 0 is the initial state, before any pumping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Cycle number, starting at 0 for the initial state.
    pub cycle: usize,
    /// Reading of the intake reservoir.
    pub intake: Reading,
    /// Reading of the outlet reservoir.
    pub outlet: Reading,
    /// Reading of the compressor chamber.
    pub compressor: Reading,
}

impl Record {
    /// Returns the moles held across all three reservoirs.
    #[must_use]
    pub fn total_moles(&self) -> f64 {
        self.intake.moles + self.outlet.moles + self.compressor.moles
    }

    /// Returns the named readings in a fixed order.
    pub(crate) fn readings(&self) -> [(&'static str, &Reading); 3] {
        [
            ("intake", &self.intake),
            ("outlet", &self.outlet),
            ("compressor", &self.compressor),
        ]
    }
}
