use serde::{Deserialize, Serialize};

/// Earth's gravitational parameter GM (m^3/s^2), WGS-84
pub const EARTH_GM: f64 = 3.986004418e14;

/// Physical constants used by the gravity model of the merge engine.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PhysicalConstants {
    /// gravitational parameter of the central body, `a = G_E * r / |r|^3` (m^3/s^2)
    pub g_e: f64,
}

impl PhysicalConstants {
    pub const fn earth() -> Self {
        Self { g_e: EARTH_GM }
    }

    pub const fn with_gravitational_parameter(g_e: f64) -> Self {
        Self { g_e }
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::earth()
    }
}
