use thiserror::Error;

/// Rejected write to an operator-settable parameter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, ParameterError>;

/// Clamps a finite value into `[min, max]`, logging when the caller overshoots.
pub(crate) fn clamp_parameter(name: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(ParameterError::NonFinite { name, value });
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        bevy::log::warn!(
            "{} = {} outside [{}, {}], clamped to {}",
            name,
            value,
            min,
            max,
            clamped
        );
    }
    Ok(clamped)
}
