mod air_data;
mod coefficients;
mod forces;

pub use air_data::{AirDataValues, MIN_AIRSPEED};
pub use coefficients::{
    calculate_coefficients, AeroCoefficients, FlapEffects, StallEnvelope, AOA_LIMIT_DEG,
    MAX_FLAP_DEFLECTION_DEG,
};
pub use forces::{calculate_forces, ForceBreakdown};
