mod integrator;
mod pitch;

pub use integrator::{apply_ground_contact, integrate_state};
pub use pitch::{update_pitch, PitchInputs, PITCH_LIMIT_DEG};
