/// Pitch attitude is limited to this magnitude (deg).
pub const PITCH_LIMIT_DEG: f64 = 40.0;

const ELEVATOR_EFFECTIVENESS: f64 = 0.008;
const STABILITY_GAIN: f64 = 0.003;
/// Trim sets the angle of attack the stability term returns to, per unit trim.
const TRIM_AOA_SCALE: f64 = 0.1;
const CG_STABILITY_FACTOR: f64 = 0.08;
const CG_AUTHORITY_FACTOR: f64 = 0.25;

/// Inputs to the first-order pitch response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchInputs {
    pub elevator: f64,
    pub trim: f64,
    /// Centre of gravity offset in [-1, 1], positive aft.
    pub cg_position: f64,
    /// Base pitch stability derivative.
    pub stability_derivative: f64,
    /// Extra stability derivative from the stall model, zero when not stalled.
    pub stall_break: f64,
    /// Unclamped angle of attack (rad).
    pub alpha: f64,
}

// --- Pure Calculation Logic ---

/// Pitch attitude after one tick.
///
/// The elevator rate term is scaled down by the CG authority factor; the
/// stability term pulls the angle of attack towards the trimmed value. An aft
/// CG reduces the restoring effect.
pub fn update_pitch(pitch: f64, inputs: &PitchInputs) -> f64 {
    let cg_stability = CG_STABILITY_FACTOR * inputs.cg_position;
    let authority = 1.0 + CG_AUTHORITY_FACTOR * inputs.cg_position;
    let cm_alpha = inputs.stability_derivative + inputs.stall_break - cg_stability;

    let control = (inputs.elevator + inputs.trim) * ELEVATOR_EFFECTIVENESS / authority;
    let aoa_error = inputs.alpha - inputs.trim * TRIM_AOA_SCALE;
    let restoring = cm_alpha * aoa_error * STABILITY_GAIN;

    let limit = PITCH_LIMIT_DEG.to_radians();
    (pitch + control + restoring).clamp(-limit, limit)
}
