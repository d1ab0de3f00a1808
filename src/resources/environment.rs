use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::MassClass;
use crate::resources::errors::{clamp_parameter, ParameterError, Result};

/// Post-stall lift model selected by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StallMode {
    /// Abrupt lift break with a flat drag rise.
    #[default]
    Basic,
    /// Progressive lift decay, growing drag and a nose-down pitching tendency.
    Enhanced,
}

/// Operator-settable environment, read by the flight model every tick.
#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentParams {
    /// Density altitude (m).
    density_altitude: f64,
    /// Wind velocity (x, z) in the inertial frame (m/s).
    wind: Vector2<f64>,
    mass_class: MassClass,
    /// Normalised fore/aft CG position in [-1, 1].
    cg_position: f64,
    stall_mode: StallMode,
}

impl EnvironmentParams {
    /// Accepted density altitudes (m). Outside this band the density derating saturates.
    pub const DENSITY_ALTITUDE_RANGE: (f64, f64) = (-10000.0, 5000.0);

    pub fn density_altitude(&self) -> f64 {
        self.density_altitude
    }

    pub fn wind(&self) -> Vector2<f64> {
        self.wind
    }

    pub fn mass_class(&self) -> MassClass {
        self.mass_class
    }

    pub fn mass(&self) -> f64 {
        self.mass_class.mass()
    }

    pub fn cg_position(&self) -> f64 {
        self.cg_position
    }

    pub fn stall_mode(&self) -> StallMode {
        self.stall_mode
    }

    /// Air density derated linearly with density altitude.
    ///
    /// The derating ratio is held within [0.5, 2.0].
    pub fn air_density(&self, sea_level_density: f64) -> f64 {
        let ratio = (1.0 - self.density_altitude / 10000.0).clamp(0.5, 2.0);
        sea_level_density * ratio
    }

    pub fn set_density_altitude(&mut self, value: f64) -> Result<f64> {
        let (min, max) = Self::DENSITY_ALTITUDE_RANGE;
        self.density_altitude = clamp_parameter("density_altitude", value, min, max)?;
        Ok(self.density_altitude)
    }

    pub fn set_wind(&mut self, wind_x: f64, wind_z: f64) -> Result<Vector2<f64>> {
        for (name, value) in [("wind_x", wind_x), ("wind_z", wind_z)] {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { name, value });
            }
        }
        self.wind = Vector2::new(wind_x, wind_z);
        Ok(self.wind)
    }

    /// Sets a horizontal wind from a headwind component. A tailwind is negative.
    pub fn set_headwind(&mut self, headwind: f64) -> Result<Vector2<f64>> {
        self.set_wind(-headwind, self.wind.y)
    }

    pub fn set_mass_class(&mut self, mass_class: MassClass) -> Result<f64> {
        let mass = mass_class.mass();
        if !mass.is_finite() {
            return Err(ParameterError::NonFinite { name: "mass", value: mass });
        }
        if mass <= 0.0 {
            return Err(ParameterError::NonPositive { name: "mass", value: mass });
        }
        self.mass_class = mass_class;
        Ok(mass)
    }

    pub fn set_cg_position(&mut self, value: f64) -> Result<f64> {
        self.cg_position = clamp_parameter("cg_position", value, -1.0, 1.0)?;
        Ok(self.cg_position)
    }

    pub fn set_stall_mode(&mut self, mode: StallMode) {
        if mode != self.stall_mode {
            info!("Stall model switched to {:?}", mode);
        }
        self.stall_mode = mode;
    }

    /// Re-applies every setter, so deserialised values obey the same limits.
    pub fn validated(self) -> Result<Self> {
        let mut params = Self::default();
        params.set_density_altitude(self.density_altitude)?;
        params.set_wind(self.wind.x, self.wind.y)?;
        params.set_mass_class(self.mass_class)?;
        params.set_cg_position(self.cg_position)?;
        params.set_stall_mode(self.stall_mode);
        Ok(params)
    }
}
