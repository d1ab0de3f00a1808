use crate::components::AircraftConstants;
use crate::physics::StallModel;

/// Full flap travel (deg).
pub const MAX_FLAP_DEFLECTION_DEG: f64 = 40.0;
/// Angle of attack is limited to this magnitude before evaluating coefficients (deg).
pub const AOA_LIMIT_DEG: f64 = 40.0;

/// Increments produced by the current flap setting.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlapEffects {
    /// Surface deflection (deg).
    pub deflection_deg: f64,
    pub lift_increment: f64,
    pub drag_increment: f64,
    pub max_cl_increment: f64,
    /// Increase of the critical angle of attack (rad).
    pub stall_aoa_increment: f64,
}

impl FlapEffects {
    /// Effects for a flap setting already limited to [0, 1] by [`ControlInputs`].
    ///
    /// [`ControlInputs`]: crate::resources::ControlInputs
    pub fn from_setting(flaps: f64) -> Self {
        let deflection_deg = flaps * MAX_FLAP_DEFLECTION_DEG;
        Self {
            deflection_deg,
            lift_increment: 0.02 * deflection_deg,
            drag_increment: 0.00015 * deflection_deg * deflection_deg,
            max_cl_increment: 0.008 * deflection_deg,
            stall_aoa_increment: (0.2 * deflection_deg).to_radians(),
        }
    }
}

/// Lift limits for the current configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StallEnvelope {
    pub max_cl: f64,
    /// Critical angle of attack (rad).
    pub stall_aoa: f64,
    /// Angle of attack at which the warning triggers (rad).
    pub warning_aoa: f64,
}

impl StallEnvelope {
    pub fn new(constants: &AircraftConstants, flaps: &FlapEffects) -> Self {
        let stall_aoa = constants.base_stall_aoa + flaps.stall_aoa_increment;
        Self {
            max_cl: constants.max_cl + flaps.max_cl_increment,
            stall_aoa,
            warning_aoa: constants.stall_warning_threshold * stall_aoa,
        }
    }

    pub fn is_warning(&self, alpha: f64) -> bool {
        alpha.abs() >= self.warning_aoa
    }

    pub fn is_stalled(&self, alpha: f64) -> bool {
        alpha.abs() > self.stall_aoa
    }

    /// Amount by which `|alpha|` exceeds the critical angle, zero below it.
    pub fn overshoot(&self, alpha: f64) -> f64 {
        (alpha.abs() - self.stall_aoa).max(0.0)
    }
}

/// Aerodynamic coefficients for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AeroCoefficients {
    pub cl: f64,
    pub cd: f64,
    pub stalled: bool,
    pub stall_warning: bool,
}

// --- Pure Calculation Logic ---

/// Lift and drag coefficients at the given angle of attack.
///
/// The warning is judged on the raw angle of attack; the coefficients use the
/// angle limited to `AOA_LIMIT_DEG`. Lift is bounded by the envelope's maximum
/// in both directions.
pub fn calculate_coefficients(
    constants: &AircraftConstants,
    flaps: &FlapEffects,
    envelope: &StallEnvelope,
    stall_model: &dyn StallModel,
    alpha: f64,
) -> AeroCoefficients {
    let limit = AOA_LIMIT_DEG.to_radians();
    let alpha_c = alpha.clamp(-limit, limit);

    let stalled = envelope.is_stalled(alpha_c);
    let (cl, extra_cd) = if stalled {
        let post = stall_model.post_stall(envelope.max_cl, alpha_c, envelope.overshoot(alpha_c));
        (post.cl, post.extra_cd)
    } else {
        (constants.lift_slope * alpha_c + flaps.lift_increment, 0.0)
    };

    let cl = cl.clamp(-envelope.max_cl, envelope.max_cl);
    let cd = constants.zero_lift_drag
        + flaps.drag_increment
        + extra_cd
        + constants.induced_drag_factor * cl * cl;

    AeroCoefficients {
        cl,
        cd,
        stalled,
        stall_warning: envelope.is_warning(alpha),
    }
}
