use nalgebra::Vector2;

use crate::components::{AircraftState, FlightStatus};

/// Advances velocity and then position by one tick (semi-implicit Euler).
///
/// The new velocity is used for the position update. Touching the ground
/// clamps the altitude and vertical speed to zero and marks the state landed.
///
/// # Arguments
/// - `state`: Aircraft state to advance in place.
/// - `net_force`: Net earth-frame force (N).
/// - `mass`: Aircraft mass (kg).
/// - `dt`: Timestep (s).
pub fn integrate_state(state: &mut AircraftState, net_force: Vector2<f64>, mass: f64, dt: f64) {
    let acceleration = net_force / mass;
    state.velocity += acceleration * dt;
    state.position += state.velocity * dt;
    apply_ground_contact(state);
}

/// Clamps a state that has sunk below the ground. Returns true on contact.
pub fn apply_ground_contact(state: &mut AircraftState) -> bool {
    if state.position.y < 0.0 {
        state.position.y = 0.0;
        state.velocity.y = 0.0;
        state.status = FlightStatus::Landed;
        true
    } else {
        false
    }
}
