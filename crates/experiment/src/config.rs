//! Experiment configuration.
//!
//! Every key is optional; omitted keys take the defaults shown here:
//!
//! ```toml
//! cycles = 250
//! max_energy_per_cycle = 5000.0
//! draw = "passive"          # or "one-way"
//!
//! [intake]
//! volume = 10.0             # m³
//! moles = 5.0               # mol
//! temperature = 300.0       # K
//!
//! [outlet]
//! volume = 5.0
//! moles = 1.0
//! temperature = 300.0
//!
//! [compressor]
//! volume = 1.0
//! ```
//!
//! A reservoir table, when present, must give all of its keys.

use std::{
    fs,
    path::{Path, PathBuf},
};

use adiabat_gas::{Compressor, GasState, StateError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Rig, run::Settings};

/// Errors that can occur while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {name} reservoir: {source}")]
    InvalidReservoir {
        name: &'static str,
        #[source]
        source: StateError,
    },

    #[error("energy per cycle must be finite and non-negative, got {0}")]
    InvalidEnergy(f64),
}

/// How the compressor draws from the intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawMode {
    /// Open port: gas flows whichever way the pressures push it.
    #[default]
    Passive,
    /// Check valve: gas only flows from the intake into the compressor.
    OneWay,
}

/// Initial conditions of a closed reservoir.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReservoirConfig {
    /// Volume in m³.
    pub volume: f64,
    /// Amount of gas in mol.
    pub moles: f64,
    /// Absolute temperature in K.
    pub temperature: f64,
}

impl ReservoirConfig {
    fn state(&self, name: &'static str) -> Result<GasState, ConfigError> {
        GasState::new(self.volume, self.moles, self.temperature)
            .map_err(|source| ConfigError::InvalidReservoir { name, source })
    }
}

/// Compressor chamber size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompressorConfig {
    /// Chamber volume in m³.
    pub volume: f64,
}

/// A complete pump experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Number of pump cycles to run.
    pub cycles: usize,
    /// Work available to each delivery stroke, in J.
    pub max_energy_per_cycle: f64,
    /// How the compressor draws from the intake.
    pub draw: DrawMode,
    pub intake: ReservoirConfig,
    pub outlet: ReservoirConfig,
    pub compressor: CompressorConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            cycles: 250,
            max_energy_per_cycle: 5000.0,
            draw: DrawMode::Passive,
            intake: ReservoirConfig {
                volume: 10.0,
                moles: 5.0,
                temperature: 300.0,
            },
            outlet: ReservoirConfig {
                volume: 5.0,
                moles: 1.0,
                temperature: 300.0,
            },
            compressor: CompressorConfig { volume: 1.0 },
        }
    }
}

impl ExperimentConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML or has
    /// unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Serializes the configuration back to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Checks every value without building anything else.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rig().map(|_| ())
    }

    /// Builds the three reservoirs described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the energy budget or any reservoir is
    /// invalid.
    pub fn rig(&self) -> Result<Rig, ConfigError> {
        let energy = self.max_energy_per_cycle;
        if !(energy.is_finite() && energy >= 0.0) {
            return Err(ConfigError::InvalidEnergy(energy));
        }

        let intake = self.intake.state("intake")?;
        let outlet = self.outlet.state("outlet")?;
        let compressor = Compressor::new(self.compressor.volume).map_err(|source| {
            ConfigError::InvalidReservoir {
                name: "compressor",
                source,
            }
        })?;

        Ok(Rig::new(intake, outlet, compressor))
    }

    /// Returns the run settings described by this configuration.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            cycles: self.cycles,
            max_energy: self.max_energy_per_cycle,
            draw: self.draw,
        }
    }
}
