//! Cycle-by-cycle pump experiments built on [`adiabat_gas`].
//!
//! An experiment wires three reservoirs together, intake → compressor →
//! outlet, and repeats the same pump cycle a fixed number of times:
//!
//! 1. The compressor draws from the intake.
//! 2. The compressor forces its charge into the outlet within an energy budget.
//! 3. The state of every reservoir is recorded.
//!
//! # Modules
//!
//! - [`config`]: TOML-backed experiment configuration
//! - [`run`]: the observed cycle loop and its events, actions, and solution
//!
//! # Example
//!
//! ```
//! use adiabat_experiment::{ExperimentConfig, run};
//!
//! let config = ExperimentConfig::from_toml_str("cycles = 20")?;
//! let rig = config.rig()?;
//!
//! let solution = run::run_unobserved(rig, &config.settings())?;
//! let (first, last) = (solution.first(), solution.last());
//!
//! assert_eq!(solution.history.len(), 21);
//! assert!(last.outlet.moles > first.outlet.moles);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod run;

mod observer;
mod record;
mod rig;

pub use config::{ConfigError, DrawMode, ExperimentConfig};
pub use observer::{Observer, StopBelow};
pub use record::{Reading, Record};
pub use rig::Rig;
