//! Typed SI boundary using `uom` quantities.
//!
//! The core works with plain `f64` values in SI base units.
//! These methods convert at the edge so callers can pass and read dimensioned
//! quantities in whatever unit they prefer.
//!
//! # Example
//!
//! ```
//! use adiabat_gas::GasState;
//! use uom::si::{
//!     amount_of_substance::mole,
//!     f64::{AmountOfSubstance, ThermodynamicTemperature, Volume},
//!     pressure::kilopascal,
//!     thermodynamic_temperature::degree_celsius,
//!     volume::liter,
//! };
//!
//! let state = GasState::from_quantities(
//!     Volume::new::<liter>(22.4),
//!     AmountOfSubstance::new::<mole>(1.0),
//!     ThermodynamicTemperature::new::<degree_celsius>(0.0),
//! )?;
//!
//! let pressure = state.pressure_quantity().get::<kilopascal>();
//! assert!((pressure - 101.4).abs() < 0.1);
//! # Ok::<(), adiabat_gas::StateError>(())
//! ```

use uom::si::{
    amount_of_substance::mole,
    energy::joule,
    f64::{AmountOfSubstance, Energy, Pressure, ThermodynamicTemperature, Volume},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    volume::cubic_meter,
};

use crate::{Compressor, GasState, Injection, StateError};

impl GasState {
    /// Creates a gas state from dimensioned quantities.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] under the same conditions as [`GasState::new`].
    pub fn from_quantities(
        volume: Volume,
        amount: AmountOfSubstance,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, StateError> {
        Self::new(
            volume.get::<cubic_meter>(),
            amount.get::<mole>(),
            temperature.get::<kelvin>(),
        )
    }

    /// Returns the container volume.
    #[must_use]
    pub fn volume_quantity(&self) -> Volume {
        Volume::new::<cubic_meter>(self.volume())
    }

    /// Returns the amount of gas.
    #[must_use]
    pub fn amount_quantity(&self) -> AmountOfSubstance {
        AmountOfSubstance::new::<mole>(self.moles())
    }

    /// Returns the absolute temperature.
    #[must_use]
    pub fn temperature_quantity(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(self.temperature())
    }

    /// Returns the pressure.
    #[must_use]
    pub fn pressure_quantity(&self) -> Pressure {
        Pressure::new::<pascal>(self.pressure())
    }

    /// Returns the internal energy `n·cv·T`.
    #[must_use]
    pub fn internal_energy_quantity(&self) -> Energy {
        Energy::new::<joule>(self.internal_energy())
    }
}

impl Compressor {
    /// Creates an empty compressor from a dimensioned chamber volume.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidVolume`] if the volume is not finite and
    /// strictly positive.
    pub fn from_volume(volume: Volume) -> Result<Self, StateError> {
        Self::new(volume.get::<cubic_meter>())
    }

    /// Runs [`powered_inject_to`](Self::powered_inject_to) with a
    /// dimensioned energy budget.
    pub fn powered_inject_energy(
        &mut self,
        downstream: &mut GasState,
        max_energy: Energy,
    ) -> Injection {
        self.powered_inject_to(downstream, max_energy.get::<joule>())
    }
}
