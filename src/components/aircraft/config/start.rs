use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ConfigError;

/// Flight conditions the aircraft is released at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    /// Altitude above ground (m).
    pub altitude: f64,
    /// Horizontal airspeed at release (m/s).
    pub airspeed: f64,
    /// Throttle fraction (0-1).
    pub throttle: f64,
    /// Initial body pitch (rad).
    #[serde(default = "default_pitch")]
    pub pitch: f64,
}

fn default_pitch() -> f64 {
    5.0_f64.to_radians()
}

impl Default for InitialConditions {
    /// 100 m, 50 m/s, 65% power.
    fn default() -> Self {
        Self::new(100.0, 50.0, 0.65)
    }
}

impl InitialConditions {
    pub fn new(altitude: f64, airspeed: f64, throttle: f64) -> Self {
        Self {
            altitude,
            airspeed,
            throttle,
            pitch: default_pitch(),
        }
    }

    pub fn with_pitch(mut self, pitch: f64) -> Self {
        self.pitch = pitch;
        self
    }

    /// Cruise preset: 1000 m, 50 m/s, 65% power.
    pub fn cruise() -> Self {
        Self::new(1000.0, 50.0, 0.65)
    }

    /// Approach preset: 300 m, 45 m/s, 60% power.
    pub fn approach() -> Self {
        Self::new(300.0, 45.0, 0.60)
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "cruise" => Some(Self::cruise()),
            "approach" => Some(Self::approach()),
            "default" => Some(Self::default()),
            _ => None,
        }
    }

    /// Rejects conditions that would feed NaN or Inf into the model.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.altitude.is_finite() || self.altitude < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "initial altitude must be finite and >= 0, got {}",
                self.altitude
            )));
        }
        if !self.airspeed.is_finite() || self.airspeed <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "initial airspeed must be finite and > 0, got {}",
                self.airspeed
            )));
        }
        if !(0.0..=1.0).contains(&self.throttle) {
            return Err(ConfigError::ValidationError(format!(
                "initial throttle must lie in [0, 1], got {}",
                self.throttle
            )));
        }
        let limit = 40.0_f64.to_radians();
        if !self.pitch.is_finite() || self.pitch.abs() > limit {
            return Err(ConfigError::ValidationError(format!(
                "initial pitch must lie within +/-40 deg, got {:.1} deg",
                self.pitch.to_degrees()
            )));
        }
        debug!(
            "Initial conditions accepted: alt={} m, V={} m/s, throttle={}",
            self.altitude, self.airspeed, self.throttle
        );
        Ok(())
    }
}
