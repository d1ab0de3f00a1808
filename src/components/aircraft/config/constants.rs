use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ConfigError;

/// Physical constants of the modelled airframe.
///
/// These never change during a run; a new run is required to fly a different airframe.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftConstants {
    /// Reference wing area (m²).
    pub wing_area: f64,
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
    /// Air density at sea level, standard day (kg/m³).
    pub sea_level_density: f64,
    /// Lift curve slope (1/rad).
    pub lift_slope: f64,
    /// Maximum lift coefficient with flaps retracted.
    pub max_cl: f64,
    /// Parasite drag coefficient at zero lift.
    pub zero_lift_drag: f64,
    /// Induced drag factor, multiplies CL².
    pub induced_drag_factor: f64,
    /// Critical angle of attack with flaps retracted (rad).
    pub base_stall_aoa: f64,
    /// Static thrust at full throttle (N).
    pub max_thrust: f64,
    /// Pitch stability derivative, negative for a statically stable airframe.
    pub pitch_stability_derivative: f64,
    /// Fraction of the stall angle at which the stall warning triggers.
    pub stall_warning_threshold: f64,
}

impl Default for AircraftConstants {
    fn default() -> Self {
        Self::cessna_172()
    }
}

impl AircraftConstants {
    /// Cessna 172 approximation.
    pub fn cessna_172() -> Self {
        Self {
            wing_area: 16.2,
            gravity: 9.81,
            sea_level_density: 1.225,
            lift_slope: 5.0,
            max_cl: 1.4,
            zero_lift_drag: 0.03,
            induced_drag_factor: 0.05,
            base_stall_aoa: 15.0_f64.to_radians(),
            max_thrust: 1700.0,
            pitch_stability_derivative: -0.05,
            stall_warning_threshold: 0.85,
        }
    }

    /// Checks that every constant is finite and physically meaningful.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("wing_area", self.wing_area),
            ("gravity", self.gravity),
            ("sea_level_density", self.sea_level_density),
            ("lift_slope", self.lift_slope),
            ("max_cl", self.max_cl),
            ("base_stall_aoa", self.base_stall_aoa),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("zero_lift_drag", self.zero_lift_drag),
            ("induced_drag_factor", self.induced_drag_factor),
            ("max_thrust", self.max_thrust),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be non-negative and finite, got {}",
                    name, value
                )));
            }
        }

        if !self.pitch_stability_derivative.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "pitch_stability_derivative must be finite, got {}",
                self.pitch_stability_derivative
            )));
        }

        if !(self.stall_warning_threshold > 0.0 && self.stall_warning_threshold <= 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "stall_warning_threshold must lie in (0, 1], got {}",
                self.stall_warning_threshold
            )));
        }

        Ok(())
    }
}
