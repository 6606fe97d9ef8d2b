//! Physical constants for an ideal diatomic gas.

/// Adiabatic index `k = cp / cv` of a diatomic ideal gas.
pub const ADIABATIC_INDEX: f64 = 7.0 / 5.0;

/// Universal gas constant `R` in J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.3145;

/// Molar heat capacity at constant volume, `cv = 5/2 · R`, in J/(mol·K).
pub const MOLAR_HEAT_CAPACITY_V: f64 = 2.5 * GAS_CONSTANT;
