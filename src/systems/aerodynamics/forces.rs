use nalgebra::Vector2;

use crate::components::AircraftConstants;
use crate::systems::aerodynamics::{AeroCoefficients, AirDataValues};

/// Forces acting on the airframe in the earth frame (x forward, z up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBreakdown {
    pub lift: f64,
    pub drag: f64,
    pub thrust: f64,
    pub weight: f64,
    /// Net force (N).
    pub net: Vector2<f64>,
}

// --- Pure Calculation Logic ---

/// Resolves lift, drag, thrust and weight into a net force.
///
/// Lift acts perpendicular and drag parallel to the relative airflow, thrust
/// along the pitch attitude.
///
/// # Arguments
/// * `constants` - Airframe constants.
/// * `air` - Air data for this tick.
/// * `coeffs` - Lift and drag coefficients for this tick.
/// * `density` - Air density (kg/m³).
/// * `throttle` - Throttle setting in [0, 1].
/// * `pitch` - Pitch attitude (rad).
/// * `mass` - Aircraft mass (kg).
pub fn calculate_forces(
    constants: &AircraftConstants,
    air: &AirDataValues,
    coeffs: &AeroCoefficients,
    density: f64,
    throttle: f64,
    pitch: f64,
    mass: f64,
) -> ForceBreakdown {
    let q_s = air.dynamic_pressure(density) * constants.wing_area;
    let lift = q_s * coeffs.cl;
    let drag = q_s * coeffs.cd;
    let thrust = throttle * constants.max_thrust;
    let weight = mass * constants.gravity;

    let (sin_g, cos_g) = air.gamma.sin_cos();
    let (sin_p, cos_p) = pitch.sin_cos();

    let net = Vector2::new(
        thrust * cos_p - drag * cos_g - lift * sin_g,
        thrust * sin_p - drag * sin_g + lift * cos_g - weight,
    );

    ForceBreakdown {
        lift,
        drag,
        thrust,
        weight,
        net,
    }
}
