use nalgebra::Vector2;

use crate::components::AircraftState;

/// Speeds below this are floored so the flow angle and dynamic pressure stay defined.
pub const MIN_AIRSPEED: f64 = 1.0;

/// Airflow seen by the airframe for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirDataValues {
    /// Velocity relative to the air mass (m/s).
    pub relative_velocity: Vector2<f64>,
    /// Magnitude of the relative velocity, floored at `MIN_AIRSPEED`.
    pub airspeed: f64,
    /// Flight path angle of the relative airflow (rad).
    pub gamma: f64,
    /// Angle of attack, pitch minus gamma (rad).
    pub alpha: f64,
}

impl AirDataValues {
    /// Computes the air data from the inertial state and the wind vector.
    ///
    /// The wind shifts the airflow, not the ground track: a headwind (negative
    /// `wind.x`) raises the airspeed without changing the inertial velocity.
    pub fn calculate(state: &AircraftState, wind: Vector2<f64>) -> Self {
        let relative_velocity = state.velocity - wind;
        let airspeed = relative_velocity.norm().max(MIN_AIRSPEED);
        let gamma = relative_velocity.y.atan2(relative_velocity.x);
        let alpha = state.pitch - gamma;

        Self {
            relative_velocity,
            airspeed,
            gamma,
            alpha,
        }
    }

    /// Dynamic pressure (Pa) at the given density.
    pub fn dynamic_pressure(&self, density: f64) -> f64 {
        0.5 * density * self.airspeed * self.airspeed
    }
}
