use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{features::ModelFeatures, telemetry::TelemetryConfig};
use crate::components::{AircraftSource, ConfigError, InitialConditions};
use crate::resources::EnvironmentParams;

/// Everything needed to start a run.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed integration step (s). The model is only verified at 0.02 s.
    pub timestep: f64,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub features: ModelFeatures,
    #[serde(default)]
    pub initial: InitialConditions,
    #[serde(default)]
    pub environment: EnvironmentParams,
    #[serde(default)]
    pub aircraft: AircraftSource,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timestep: 0.02,
            telemetry: TelemetryConfig::default(),
            features: ModelFeatures::default(),
            initial: InitialConditions::default(),
            environment: EnvironmentParams::default(),
            aircraft: AircraftSource::default(),
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "timestep must be positive, got {}",
                self.timestep
            )));
        }
        if self.timestep > 0.05 {
            warn!(
                "timestep {} s is larger than the integrator has been verified for",
                self.timestep
            );
        }
        if !self.telemetry.interval.is_finite() || self.telemetry.interval <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "telemetry interval must be positive, got {}",
                self.telemetry.interval
            )));
        }
        self.initial.validate()?;
        self.environment
            .clone()
            .validated()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        Ok(())
    }

    /// Frequency of the fixed tick (Hz).
    pub fn tick_rate(&self) -> f64 {
        1.0 / self.timestep
    }
}
