use serde::{Deserialize, Serialize};

/// Loading selector for the airframe.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum MassClass {
    /// 900 kg.
    Light,
    /// 1100 kg.
    #[default]
    Normal,
    /// 1400 kg.
    Heavy,
    /// Arbitrary all-up mass (kg).
    Custom(f64),
}

impl MassClass {
    /// Total mass of the aircraft (kg).
    pub fn mass(&self) -> f64 {
        match self {
            MassClass::Light => 900.0,
            MassClass::Normal => 1100.0,
            MassClass::Heavy => 1400.0,
            MassClass::Custom(mass) => *mass,
        }
    }

    pub fn presets() -> [MassClass; 3] {
        [MassClass::Light, MassClass::Normal, MassClass::Heavy]
    }
}
