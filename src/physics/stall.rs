use crate::physics::traits::{PostStall, StallModel};
use crate::resources::StallMode;

/// Angle over which the enhanced model's lift loss and drag rise are scaled.
fn stall_scale() -> f64 {
    10.0_f64.to_radians()
}

/// Abrupt lift break: half of the maximum lift and a flat drag penalty.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStall;

impl StallModel for BasicStall {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn post_stall(&self, max_cl: f64, alpha: f64, _over: f64) -> PostStall {
        PostStall {
            cl: max_cl * 0.5 * alpha.signum(),
            extra_cd: 0.1,
        }
    }
}

/// Progressive stall: lift decays exponentially with the overshoot while drag
/// grows linearly, and the nose drops.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnhancedStall;

impl StallModel for EnhancedStall {
    fn name(&self) -> &'static str {
        "enhanced"
    }

    fn post_stall(&self, max_cl: f64, alpha: f64, over: f64) -> PostStall {
        let decay = (-over / stall_scale()).exp();
        PostStall {
            cl: max_cl * 0.6 * decay * alpha.signum(),
            extra_cd: 0.2 * (over / stall_scale()),
        }
    }

    fn pitch_break(&self, over: f64) -> f64 {
        -0.02 * (over / stall_scale())
    }
}

impl StallMode {
    /// Strategy implementing this mode.
    pub fn model(self) -> &'static dyn StallModel {
        match self {
            StallMode::Basic => &BasicStall,
            StallMode::Enhanced => &EnhancedStall,
        }
    }
}
