use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{constants::PhysicalConstants, quaternion::ConjugateConvention};

/// What to do when a measurement is not newer than the previous state.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NegativeDtPolicy {
    /// negative (or NaN) dt becomes 0: sensors are still fused, nothing is
    /// integrated and time does not move backwards
    #[default]
    Clamp,
    /// integrate backwards in time with the negative dt
    Propagate,
}

/// Relative weights of the redundant vertical position sources.
///
/// Both default to 1.0, i.e. a plain mean. Scale them by the inverse sensor
/// variance once that is characterised.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SensorWeights {
    pub altimeter: f64,
    pub gps_vertical: f64,
}

impl Default for SensorWeights {
    fn default() -> Self {
        Self {
            altimeter: 1.0,
            gps_vertical: 1.0,
        }
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct MergeConfig {
    pub constants: PhysicalConstants,
    pub weights: SensorWeights,
    pub conjugate_convention: ConjugateConvention,
    pub negative_dt_policy: NegativeDtPolicy,
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidGravitationalParameter(f64),
    InvalidWeight { name: &'static str, value: f64 },
    ZeroVerticalWeights,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGravitationalParameter(g_e) => write!(
                f,
                "gravitational parameter must be finite and non-negative, got {}",
                g_e
            ),
            Self::InvalidWeight { name, value } => write!(
                f,
                "weight `{}` must be finite and non-negative, got {}",
                name, value
            ),
            Self::ZeroVerticalWeights => {
                write!(f, "altimeter and gps_vertical weights are both zero")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

impl MergeConfig {
    pub fn new(constants: PhysicalConstants) -> Self {
        Self {
            constants,
            ..Self::default()
        }
    }

    /// Check the configuration once up front, the merge functions themselves
    /// never fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g_e = self.constants.g_e;
        if !g_e.is_finite() || g_e < 0.0 {
            return Err(ConfigError::InvalidGravitationalParameter(g_e));
        }

        for (name, value) in [
            ("altimeter", self.weights.altimeter),
            ("gps_vertical", self.weights.gps_vertical),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        if self.weights.altimeter == 0.0 && self.weights.gps_vertical == 0.0 {
            return Err(ConfigError::ZeroVerticalWeights);
        }

        Ok(())
    }
}
