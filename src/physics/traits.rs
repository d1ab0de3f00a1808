/// Lift and extra drag produced beyond the critical angle of attack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostStall {
    pub cl: f64,
    /// Drag added on top of parasite, flap and induced drag.
    pub extra_cd: f64,
}

/// Behaviour of the wing once the critical angle of attack is exceeded.
pub trait StallModel: Send + Sync {
    fn name(&self) -> &'static str;

    /// Post-stall coefficients.
    ///
    /// # Arguments
    /// * `max_cl` - Maximum lift coefficient including the flap increment.
    /// * `alpha` - Clamped angle of attack (rad), only its sign is used for direction.
    /// * `over` - How far `|alpha|` exceeds the critical angle (rad), always >= 0.
    fn post_stall(&self, max_cl: f64, alpha: f64, over: f64) -> PostStall;

    /// Contribution to the pitch stability derivative while stalled.
    fn pitch_break(&self, _over: f64) -> f64 {
        0.0
    }
}
