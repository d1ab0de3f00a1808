use bevy::prelude::*;

/// Sent once when an aircraft makes ground contact. The aircraft is no longer
/// integrated after this.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct FlightTerminated {
    pub entity: Entity,
    pub sim_time: f64,
    /// Horizontal distance flown (m).
    pub distance: f64,
    /// Inertial speed at contact (m/s).
    pub ground_speed: f64,
}
