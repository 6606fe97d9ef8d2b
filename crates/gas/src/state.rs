use crate::{
    StateError,
    constants::{GAS_CONSTANT, MOLAR_HEAT_CAPACITY_V},
};

/// A closed reservoir of ideal gas.
///
/// A `GasState` captures the container volume, the amount of gas it holds,
/// and the gas temperature.
/// Pressure is derived from the ideal gas law, `P = n·R·T / V`.
///
/// The fields are private so that the following always hold:
///
/// - `volume` is finite and strictly positive
/// - `moles` is finite and non-negative
/// - `temperature` is finite and non-negative
///
/// Construction validates raw values and returns a [`StateError`] on
/// violation.
/// The mixing and compression operations keep the invariants by resolving
/// degenerate divisions to zero and clamping mole counts.
///
/// # Example
///
/// ```
/// use adiabat_gas::{GasState, constants::GAS_CONSTANT};
///
/// let state = GasState::new(1.0, 1.0, 101_325.0 / GAS_CONSTANT)?;
/// assert!((state.pressure() - 101_325.0).abs() < 1e-9);
///
/// let empty = GasState::empty(1.0)?;
/// assert_eq!(empty.pressure(), 0.0);
/// # Ok::<(), adiabat_gas::StateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasState {
    volume: f64,
    moles: f64,
    temperature: f64,
}

impl GasState {
    /// Creates a gas state from a volume (m³), amount (mol), and absolute
    /// temperature (K).
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] if the volume is not strictly positive, or if
    /// the moles or temperature are negative.
    /// Any non-finite value is rejected.
    pub fn new(volume: f64, moles: f64, temperature: f64) -> Result<Self, StateError> {
        if !(volume.is_finite() && volume > 0.0) {
            return Err(StateError::InvalidVolume(volume));
        }
        if !(moles.is_finite() && moles >= 0.0) {
            return Err(StateError::NegativeMoles(moles));
        }
        if !(temperature.is_finite() && temperature >= 0.0) {
            return Err(StateError::InvalidTemperature(temperature));
        }

        Ok(Self {
            volume,
            moles,
            temperature,
        })
    }

    /// Creates an empty container with no gas and zero temperature.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidVolume`] if the volume is not finite and
    /// strictly positive.
    pub fn empty(volume: f64) -> Result<Self, StateError> {
        Self::new(volume, 0.0, 0.0)
    }

    /// Returns the container volume in m³.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Returns the amount of gas in mol.
    #[must_use]
    pub fn moles(&self) -> f64 {
        self.moles
    }

    /// Returns the absolute temperature in K.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Returns `true` if the container holds no gas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moles == 0.0
    }

    /// Computes pressure in Pa with `P = n·R·T / V`.
    ///
    /// An empty container has zero pressure regardless of its temperature.
    #[must_use]
    pub fn pressure(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.moles * GAS_CONSTANT * self.temperature / self.volume
    }

    /// Computes internal energy in J with `U = n·cv·T`.
    #[must_use]
    pub fn internal_energy(&self) -> f64 {
        self.moles * MOLAR_HEAT_CAPACITY_V * self.temperature
    }

    /// Sets the volume.
    ///
    /// Callers are responsible for passing a finite, strictly positive value.
    pub(crate) fn set_volume(&mut self, volume: f64) {
        debug_assert!(volume.is_finite() && volume > 0.0, "invalid volume {volume}");
        self.volume = volume;
    }

    /// Sets the amount of gas, clamping negative results to zero.
    pub(crate) fn set_moles(&mut self, moles: f64) {
        self.moles = clamp_moles(moles);
    }

    /// Sets the temperature, resolving non-finite or negative values to zero.
    pub(crate) fn set_temperature(&mut self, temperature: f64) {
        self.temperature = finite_or_zero(temperature).max(0.0);
    }
}

/// Returns `value` if it is finite, otherwise zero.
///
/// Used wherever a formula divides by a quantity that may legitimately be
/// zero, such as the moles of an empty container.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Clamps a computed mole count to a finite, non-negative value.
///
/// A negative result means the arithmetic of a mixing or refund step overshot.
/// It is logged so that the occurrence is visible even though the state stays
/// physically valid.
fn clamp_moles(moles: f64) -> f64 {
    if moles.is_nan() {
        log::warn!("mole count resolved to NaN; clamping to zero");
        return 0.0;
    }
    if moles < 0.0 {
        log::warn!("mole count {moles:e} is negative; clamping to zero");
        return 0.0;
    }
    if moles.is_infinite() {
        log::warn!("mole count is infinite; clamping to zero");
        return 0.0;
    }
    moles
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn pressure_follows_ideal_gas_law() -> Result<(), StateError> {
        let target = 2500.0;
        let state = GasState::new(1.0, 1.0, target / GAS_CONSTANT)?;
        assert_relative_eq!(state.pressure(), target);

        // Doubling the volume halves the pressure.
        let state = GasState::new(2.0, 1.0, target / GAS_CONSTANT)?;
        assert_relative_eq!(state.pressure(), target / 2.0);

        Ok(())
    }

    #[test]
    fn empty_state_has_zero_pressure() -> Result<(), StateError> {
        let state = GasState::new(1.0, 0.0, 0.0)?;
        assert_eq!(state.pressure(), 0.0);
        assert!(!state.pressure().is_nan());
        assert!(state.is_empty());

        // A warm but empty container still has no pressure.
        let state = GasState::new(1.0, 0.0, 350.0)?;
        assert_eq!(state.pressure(), 0.0);

        Ok(())
    }

    #[test]
    fn internal_energy_is_n_cv_t() -> Result<(), StateError> {
        let state = GasState::new(3.0, 2.0, 300.0)?;
        assert_relative_eq!(state.internal_energy(), 2.0 * 2.5 * GAS_CONSTANT * 300.0);
        Ok(())
    }

    #[test]
    fn rejects_invalid_construction() {
        assert_eq!(
            GasState::new(0.0, 1.0, 300.0),
            Err(StateError::InvalidVolume(0.0))
        );
        assert_eq!(
            GasState::new(-1.0, 1.0, 300.0),
            Err(StateError::InvalidVolume(-1.0))
        );
        assert!(matches!(
            GasState::new(f64::INFINITY, 1.0, 300.0),
            Err(StateError::InvalidVolume(_))
        ));
        assert_eq!(
            GasState::new(1.0, -0.5, 300.0),
            Err(StateError::NegativeMoles(-0.5))
        );
        assert!(matches!(
            GasState::new(1.0, f64::NAN, 300.0),
            Err(StateError::NegativeMoles(_))
        ));
        assert_eq!(
            GasState::new(1.0, 1.0, -10.0),
            Err(StateError::InvalidTemperature(-10.0))
        );
    }

    #[test]
    fn setters_keep_invariants() -> Result<(), StateError> {
        let mut state = GasState::new(1.0, 1.0, 300.0)?;

        state.set_moles(-1e-12);
        assert_eq!(state.moles(), 0.0);

        state.set_moles(f64::NAN);
        assert_eq!(state.moles(), 0.0);

        state.set_temperature(f64::INFINITY);
        assert_eq!(state.temperature(), 0.0);

        state.set_temperature(f64::NAN);
        assert_eq!(state.temperature(), 0.0);

        Ok(())
    }
}
