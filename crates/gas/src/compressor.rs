use crate::{
    GasState, StateError, Valve,
    constants::{ADIABATIC_INDEX, GAS_CONSTANT, MOLAR_HEAT_CAPACITY_V},
    one_way_mix, passive_mix,
};

/// A piston chamber that draws gas in and forces it into a downstream
/// reservoir.
///
/// A `Compressor` wraps a [`GasState`] that starts empty.
/// Each pump cycle has two strokes:
///
/// 1. Intake: [`draw_from`](Self::draw_from) passively mixes an upstream
///    reservoir with the chamber.
/// 2. Delivery: [`powered_inject_to`](Self::powered_inject_to) pushes the
///    chamber's gas downstream using at most a fixed amount of work, and keeps
///    whatever the budget could not move.
///
/// # Example
///
/// ```
/// use adiabat_gas::{Compressor, GasState};
///
/// let mut tank = GasState::new(10.0, 5.0, 300.0)?;
/// let mut receiver = GasState::new(5.0, 1.0, 300.0)?;
/// let mut compressor = Compressor::new(1.0)?;
///
/// compressor.draw_from(&mut tank);
/// let injection = compressor.powered_inject_to(&mut receiver, 5000.0);
///
/// assert!(injection.delivered > 0.0);
/// assert!(compressor.gas().is_empty());
/// # Ok::<(), adiabat_gas::StateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compressor {
    chamber: GasState,
}

/// Summary of a single delivery stroke.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Injection {
    /// Net moles added to the downstream reservoir by the stroke.
    ///
    /// Negative when the downstream reservoir lost gas to the chamber.
    pub delivered: f64,

    /// Moles left in the chamber because the budget could not move them.
    pub refunded: f64,

    /// Volume the merged downstream gas was compressed to, in m³.
    pub compressed_volume: f64,

    /// Whether the energy budget, rather than the downstream volume, limited
    /// the compression.
    pub energy_limited: bool,
}

impl Compressor {
    /// Creates an empty compressor with the given chamber volume in m³.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidVolume`] if the volume is not finite and
    /// strictly positive.
    pub fn new(volume: f64) -> Result<Self, StateError> {
        Ok(Self {
            chamber: GasState::empty(volume)?,
        })
    }

    /// Returns the gas currently held in the chamber.
    #[must_use]
    pub fn gas(&self) -> &GasState {
        &self.chamber
    }

    /// Returns the chamber gas for use with the mixing functions.
    pub fn gas_mut(&mut self) -> &mut GasState {
        &mut self.chamber
    }

    /// Returns the chamber volume in m³.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.chamber.volume()
    }

    /// Returns the moles held in the chamber.
    #[must_use]
    pub fn moles(&self) -> f64 {
        self.chamber.moles()
    }

    /// Returns the chamber temperature in K.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.chamber.temperature()
    }

    /// Returns the chamber pressure in Pa.
    #[must_use]
    pub fn pressure(&self) -> f64 {
        self.chamber.pressure()
    }

    /// Intake stroke: passively mixes `source` with the chamber.
    pub fn draw_from(&mut self, source: &mut GasState) {
        passive_mix(source, &mut self.chamber);
    }

    /// Intake stroke through a check valve that only lets gas flow from
    /// `source` into the chamber.
    pub fn draw_one_way(&mut self, source: &mut GasState) -> Valve {
        one_way_mix(source, &mut self.chamber)
    }

    /// Delivery stroke: forces the chamber's gas into `downstream` using at
    /// most `max_energy` joules of work.
    ///
    /// The stroke proceeds as follows:
    ///
    /// 1. The chamber opens to `downstream` and the two passively mix.
    /// 2. The chamber's gas is merged into `downstream`, which temporarily
    ///    spans both volumes.
    /// 3. The merged gas is compressed adiabatically back toward the original
    ///    downstream volume, as far as the budget allows.
    ///    From `W = ΔU`, the smallest reachable volume is
    ///    `((E·Tc·R) / (Pc·cv·Vm^k))^(1/(1−k))`, where `Tc` and `Pc` are the
    ///    chamber's temperature and pressure after step 1 and `Vm` is the
    ///    merged volume.
    /// 4. Gas that remains in the chamber's share of the compressed volume is
    ///    refunded to the chamber at the downstream temperature.
    ///
    /// The compressed volume is clamped to `[old, merged]`.
    /// A budget too small to compress at all pins it at the merged volume
    /// rather than expanding the gas past it, so the chamber keeps exactly its
    /// volume share of the pooled gas.
    ///
    /// An empty chamber has nothing to deliver, so `downstream` is left
    /// unchanged regardless of the budget.
    pub fn powered_inject_to(
        &mut self,
        downstream: &mut GasState,
        max_energy: f64,
    ) -> Injection {
        if self.chamber.is_empty() {
            return Injection {
                compressed_volume: downstream.volume(),
                ..Injection::default()
            };
        }

        let initial_moles = downstream.moles();
        passive_mix(&mut self.chamber, downstream);

        let old_volume = downstream.volume();
        let merged_volume = old_volume + self.chamber.volume();
        downstream.set_volume(merged_volume);
        downstream.set_moles(downstream.moles() + self.chamber.moles());

        let powered_volume = self.max_powered_volume(max_energy, merged_volume);
        let new_volume = powered_volume.clamp(old_volume, merged_volume);
        downstream.adiabatic_volume_change(new_volume);

        let refunded = (downstream.moles() * (new_volume - old_volume) / new_volume)
            .clamp(0.0, downstream.moles());
        self.chamber.set_moles(refunded);
        self.chamber.set_temperature(downstream.temperature());
        downstream.set_volume(old_volume);
        downstream.set_moles(downstream.moles() - refunded);

        let injection = Injection {
            delivered: downstream.moles() - initial_moles,
            refunded,
            compressed_volume: new_volume,
            energy_limited: new_volume > old_volume,
        };
        log::trace!(
            "powered injection: budget={max_energy} powered_volume={powered_volume:.6e} {injection:?}"
        );
        injection
    }

    /// Returns the smallest volume the merged gas can reach within
    /// `max_energy`.
    ///
    /// The result is unclamped: a huge budget underflows to `0.0` and a zero
    /// budget overflows to `+inf`, and the caller's clamp maps those to full
    /// and no compression respectively.
    /// Resolves to `merged_volume` when the chamber has no pressure to work
    /// from or the formula is undefined (NaN, e.g. a negative budget).
    fn max_powered_volume(&self, max_energy: f64, merged_volume: f64) -> f64 {
        let k = ADIABATIC_INDEX;
        let pressure = self.chamber.pressure();
        if !(pressure > 0.0) {
            return merged_volume;
        }

        let ratio = (max_energy * self.chamber.temperature() * GAS_CONSTANT)
            / (pressure * MOLAR_HEAT_CAPACITY_V * merged_volume.powf(k));
        let volume = ratio.powf(1.0 / (1.0 - k));

        if volume.is_nan() {
            merged_volume
        } else {
            volume
        }
    }
}

impl AsRef<GasState> for Compressor {
    fn as_ref(&self) -> &GasState {
        &self.chamber
    }
}
