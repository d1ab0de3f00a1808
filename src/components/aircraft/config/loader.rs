use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::aircraft::config::AircraftConstants;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Flat on-disk aircraft description. Angles are in degrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAircraftConfig {
    /// Aircraft identification
    pub name: String,

    /// Geometry
    pub wing_area: f64,

    /// Lift and drag
    pub lift_slope: f64,
    pub max_cl: f64,
    pub zero_lift_drag: f64,
    pub induced_drag_factor: f64,
    pub stall_aoa_deg: f64,

    /// Propulsion
    pub max_thrust: f64,

    /// Pitch response
    pub pitch_stability_derivative: f64,

    #[serde(default = "default_gravity")]
    pub gravity: f64,
    #[serde(default = "default_sea_level_density")]
    pub sea_level_density: f64,
    #[serde(default = "default_stall_warning_threshold")]
    pub stall_warning_threshold: f64,
}

fn default_gravity() -> f64 {
    9.81
}

fn default_sea_level_density() -> f64 {
    1.225
}

fn default_stall_warning_threshold() -> f64 {
    0.85
}

impl RawAircraftConfig {
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Converts to model constants, rejecting values the model cannot fly with.
    pub fn into_constants(self) -> Result<AircraftConstants, ConfigError> {
        let constants = AircraftConstants {
            wing_area: self.wing_area,
            gravity: self.gravity,
            sea_level_density: self.sea_level_density,
            lift_slope: self.lift_slope,
            max_cl: self.max_cl,
            zero_lift_drag: self.zero_lift_drag,
            induced_drag_factor: self.induced_drag_factor,
            base_stall_aoa: self.stall_aoa_deg.to_radians(),
            max_thrust: self.max_thrust,
            pitch_stability_derivative: self.pitch_stability_derivative,
            stall_warning_threshold: self.stall_warning_threshold,
        };
        constants.validate()?;
        Ok(constants)
    }
}
