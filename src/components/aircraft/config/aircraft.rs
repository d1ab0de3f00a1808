use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::aircraft::config::{AircraftConstants, ConfigError, RawAircraftConfig};

/// Named airframe together with its physical constants.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct AircraftConfig {
    /// Name of the aircraft, defaults to type name.
    pub name: String,
    /// Type of aircraft.
    pub ac_type: AircraftType,
    /// Physical constants used by the flight model.
    pub constants: AircraftConstants,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self::from_programmed(AircraftType::Cessna172)
    }
}

impl AircraftConfig {
    /// Creates a new aircraft configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - Hardcoded (`Programmed`) or loaded from a YAML file (`File`).
    ///
    /// # Returns
    /// A `Result` containing the new configuration or an error if the file fails to load.
    pub fn new(source: &AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Programmed(aircraft_type) => {
                Ok(Self::from_programmed(aircraft_type.clone()))
            }
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(aircraft_type: AircraftType) -> Self {
        match aircraft_type {
            AircraftType::Cessna172 => Self {
                name: "Cessna172".to_string(),
                ac_type: AircraftType::Cessna172,
                constants: AircraftConstants::cessna_172(),
            },
            AircraftType::Custom(name) => Self {
                name: name.clone(),
                ac_type: AircraftType::Custom(name),
                constants: AircraftConstants::cessna_172(),
            },
        }
    }

    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path.as_ref())?;
        let raw = RawAircraftConfig::from_yaml(&file_contents)?;
        let name = raw.name.clone();
        let constants = raw.into_constants()?;
        info!("Loaded aircraft '{}' from {}", name, path.as_ref().display());

        Ok(Self {
            name: name.clone(),
            ac_type: AircraftType::Custom(name),
            constants,
        })
    }

    pub fn cessna_172() -> Self {
        Self::from_programmed(AircraftType::Cessna172)
    }
}

/// Source for aircraft configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AircraftSource {
    Programmed(AircraftType),
    File(PathBuf),
}

impl Default for AircraftSource {
    fn default() -> Self {
        AircraftSource::Programmed(AircraftType::Cessna172)
    }
}

/// Built-in airframes.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum AircraftType {
    Cessna172,
    Custom(String),
}
