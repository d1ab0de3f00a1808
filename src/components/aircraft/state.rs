use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::{ConfigError, InitialConditions};

/// Whether the aircraft is still being integrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlightStatus {
    #[default]
    Airborne,
    /// Ground contact. Terminal: the model no longer advances the state.
    Landed,
}

/// Kinematic state of the aircraft in the vertical plane.
///
/// Inertial frame: `x` positive forward along the ground, `z` positive up.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// Position (x, z) in metres. `z` is altitude above ground.
    pub position: Vector2<f64>,
    /// Inertial velocity (vx, vz) in m/s.
    pub velocity: Vector2<f64>,
    /// Body pitch attitude (rad), positive nose up.
    pub pitch: f64,
    /// Simulated time since release (s).
    pub sim_time: f64,
    pub status: FlightStatus,
}

impl Default for AircraftState {
    fn default() -> Self {
        Self::released(&InitialConditions::default())
    }
}

impl AircraftState {
    /// Releases the aircraft in level flight at the given conditions.
    ///
    /// Fails with [`ConfigError::ValidationError`] for non-finite or
    /// out-of-range conditions.
    pub fn from_initial(initial: &InitialConditions) -> Result<Self, ConfigError> {
        initial.validate()?;
        Ok(Self::released(initial))
    }

    fn released(initial: &InitialConditions) -> Self {
        Self {
            position: Vector2::new(0.0, initial.altitude),
            velocity: Vector2::new(initial.airspeed, 0.0),
            pitch: initial.pitch,
            sim_time: 0.0,
            status: FlightStatus::Airborne,
        }
    }

    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    pub fn vertical_speed(&self) -> f64 {
        self.velocity.y
    }

    /// Magnitude of the inertial velocity (m/s).
    pub fn ground_speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn is_landed(&self) -> bool {
        self.status == FlightStatus::Landed
    }
}

/// Per-tick aerodynamic diagnostics. Recomputed every step, never set externally.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlightDiagnostics {
    /// Angle of attack (rad), unclamped.
    pub angle_of_attack: f64,
    /// Flight path angle relative to the air mass (rad).
    pub flight_path_angle: f64,
    /// Airspeed used for dynamic pressure (m/s), floored at 1 m/s.
    pub airspeed: f64,
    pub cl: f64,
    pub cd: f64,
    pub stalled: bool,
    pub stall_warning: bool,
}
