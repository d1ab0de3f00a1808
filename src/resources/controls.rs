use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::errors::{clamp_parameter, Result};

/// Pilot control inputs, read by the flight model every tick.
///
/// All writes go through the setters so the values always lie in range.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ControlInputs {
    throttle: f64,
    elevator: f64,
    trim_elevator: f64,
    flaps: f64,
}

/// Discrete operator commands. Each nudges one control by a fixed step.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlCommand {
    ElevatorUp,
    ElevatorDown,
    ThrottleUp,
    ThrottleDown,
    TrimUp,
    TrimDown,
    FlapsExtend,
    FlapsRetract,
}

impl ControlCommand {
    pub const ELEVATOR_STEP: f64 = 0.1;
    pub const THROTTLE_STEP: f64 = 0.05;
    pub const TRIM_STEP: f64 = 0.02;
    pub const FLAP_STEP: f64 = 0.25;
}

impl ControlInputs {
    pub fn new(throttle: f64) -> Result<Self> {
        let mut controls = Self::default();
        controls.set_throttle(throttle)?;
        Ok(controls)
    }

    pub fn throttle(&self) -> f64 {
        self.throttle
    }

    pub fn elevator(&self) -> f64 {
        self.elevator
    }

    pub fn trim_elevator(&self) -> f64 {
        self.trim_elevator
    }

    pub fn flaps(&self) -> f64 {
        self.flaps
    }

    pub fn set_throttle(&mut self, value: f64) -> Result<f64> {
        self.throttle = clamp_parameter("throttle", value, 0.0, 1.0)?;
        Ok(self.throttle)
    }

    pub fn set_elevator(&mut self, value: f64) -> Result<f64> {
        self.elevator = clamp_parameter("elevator", value, -1.0, 1.0)?;
        Ok(self.elevator)
    }

    pub fn set_trim_elevator(&mut self, value: f64) -> Result<f64> {
        self.trim_elevator = clamp_parameter("trim_elevator", value, -1.0, 1.0)?;
        Ok(self.trim_elevator)
    }

    pub fn set_flaps(&mut self, value: f64) -> Result<f64> {
        self.flaps = clamp_parameter("flaps", value, 0.0, 1.0)?;
        Ok(self.flaps)
    }

    /// Applies one operator command. Steps saturate silently at the control limits.
    pub fn apply(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::ElevatorUp => {
                self.elevator = (self.elevator + ControlCommand::ELEVATOR_STEP).min(1.0)
            }
            ControlCommand::ElevatorDown => {
                self.elevator = (self.elevator - ControlCommand::ELEVATOR_STEP).max(-1.0)
            }
            ControlCommand::ThrottleUp => {
                self.throttle = (self.throttle + ControlCommand::THROTTLE_STEP).min(1.0)
            }
            ControlCommand::ThrottleDown => {
                self.throttle = (self.throttle - ControlCommand::THROTTLE_STEP).max(0.0)
            }
            ControlCommand::TrimUp => {
                self.trim_elevator = (self.trim_elevator + ControlCommand::TRIM_STEP).min(1.0)
            }
            ControlCommand::TrimDown => {
                self.trim_elevator = (self.trim_elevator - ControlCommand::TRIM_STEP).max(-1.0)
            }
            ControlCommand::FlapsExtend => {
                self.flaps = (self.flaps + ControlCommand::FLAP_STEP).min(1.0)
            }
            ControlCommand::FlapsRetract => {
                self.flaps = (self.flaps - ControlCommand::FLAP_STEP).max(0.0)
            }
        }
    }
}
