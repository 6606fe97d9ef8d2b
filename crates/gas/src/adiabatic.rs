use crate::{
    GasState,
    constants::{ADIABATIC_INDEX, GAS_CONSTANT},
    state::finite_or_zero,
};

/// Computes the pressure after a reversible adiabatic volume change.
///
/// Uses the invariant `P·V^k = const`, so `P' = P · V^k / V'^k`.
#[must_use]
pub fn adiabatic_pressure(pressure: f64, volume: f64, new_volume: f64) -> f64 {
    pressure * volume.powf(ADIABATIC_INDEX) / new_volume.powf(ADIABATIC_INDEX)
}

impl GasState {
    /// Applies a reversible adiabatic change to `new_volume`, holding moles
    /// fixed.
    ///
    /// Volume and temperature are updated in place; pressure follows from
    /// `P·V^k = const`.
    ///
    /// - An infinite `new_volume` is an unbounded free-expansion sink and
    ///   leaves the state unchanged.
    /// - A `new_volume` that is NaN, zero, or negative is ignored.
    /// - An empty container ends at zero temperature.
    pub fn adiabatic_volume_change(&mut self, new_volume: f64) {
        if new_volume == f64::INFINITY {
            return;
        }
        if !(new_volume > 0.0) {
            log::warn!("ignoring adiabatic change to invalid volume {new_volume}");
            return;
        }

        let temperature = self.temperature_after_adiabatic(new_volume);
        self.set_volume(new_volume);
        self.set_temperature(temperature);
    }

    /// Returns the temperature this state would reach after an adiabatic
    /// change to `new_volume`, without modifying it.
    ///
    /// Mixing uses this to run a virtual piston: the temperature responds to
    /// the compression or expansion while the real container volume stays put.
    pub(crate) fn temperature_after_adiabatic(&self, new_volume: f64) -> f64 {
        let new_pressure = adiabatic_pressure(self.pressure(), self.volume(), new_volume);
        finite_or_zero(new_pressure * new_volume / (self.moles() * GAS_CONSTANT))
    }
}
