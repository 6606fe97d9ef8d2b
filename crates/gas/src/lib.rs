//! Ideal gas reservoirs stepped through discrete pump cycles.
//!
//! This crate models closed reservoirs of an ideal diatomic gas and the
//! operations that move gas between them:
//!
//! - [`GasState`]: a single reservoir (volume, moles, temperature) with
//!   pressure derived from the ideal gas law
//! - [`GasState::adiabatic_volume_change`]: a reversible adiabatic change to
//!   a new volume at fixed moles
//! - [`passive_mix`]: equalize two reservoirs to a common pressure and
//!   temperature with no external work
//! - [`one_way_mix`]: a passive mix through a check valve that only opens
//!   from the higher-pressure side
//! - [`Compressor`]: an initially empty chamber that draws gas in and forces
//!   it downstream within an energy budget
//!
//! All quantities are plain `f64` values in SI units (m³, mol, K, Pa, J).
//! The [`units`] module offers the same boundary with `uom` quantities.
//!
//! # Example
//!
//! ```
//! use adiabat_gas::{Compressor, GasState};
//!
//! let mut intake = GasState::new(10.0, 5.0, 300.0)?;
//! let mut outlet = GasState::new(5.0, 1.0, 300.0)?;
//! let mut compressor = Compressor::new(1.0)?;
//!
//! for _ in 0..10 {
//!     compressor.draw_from(&mut intake);
//!     compressor.powered_inject_to(&mut outlet, 5000.0);
//! }
//!
//! assert!(outlet.moles() > 1.0);
//! # Ok::<(), adiabat_gas::StateError>(())
//! ```

mod adiabatic;
mod compressor;
mod error;
mod mix;
mod state;

pub mod constants;
pub mod units;

pub use adiabatic::adiabatic_pressure;
pub use compressor::{Compressor, Injection};
pub use error::StateError;
pub use mix::{Valve, one_way_mix, passive_mix};
pub use state::GasState;
