use bevy::prelude::*;
use nalgebra::Vector2;

use crate::components::{AircraftConstants, AircraftState, FlightDiagnostics, FlightStatus};
use crate::resources::{ControlInputs, EnvironmentParams, ModelFeatures, TelemetryRecord};
use crate::systems::aerodynamics::{
    calculate_coefficients, calculate_forces, AirDataValues, FlapEffects, StallEnvelope,
};
use crate::systems::physics::{integrate_state, update_pitch, PitchInputs};

/// Result of a single [`FlightModel::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub status: FlightStatus,
    /// True only on the tick that made ground contact.
    pub touchdown: bool,
    /// Emitted once per telemetry interval.
    pub telemetry: Option<TelemetryRecord>,
}

/// Longitudinal flight model for a light single-engine aircraft.
///
/// Holds the airframe constants and the diagnostics of the last tick. The
/// kinematic state, controls and environment are passed in so the caller owns them.
#[derive(Component, Debug, Clone)]
pub struct FlightModel {
    constants: AircraftConstants,
    features: ModelFeatures,
    telemetry_interval: f64,
    next_log_time: f64,
    diagnostics: FlightDiagnostics,
}

impl FlightModel {
    pub fn new(constants: AircraftConstants, features: ModelFeatures) -> Self {
        Self {
            constants,
            features,
            telemetry_interval: 1.0,
            next_log_time: 0.0,
            diagnostics: FlightDiagnostics::default(),
        }
    }

    /// Sets the simulated time between telemetry records. Non-positive or
    /// non-finite intervals are ignored.
    pub fn with_telemetry_interval(mut self, interval: f64) -> Self {
        if interval.is_finite() && interval > 0.0 {
            self.telemetry_interval = interval;
        } else {
            warn!("Ignoring telemetry interval {}, keeping {}", interval, self.telemetry_interval);
        }
        self
    }

    pub fn constants(&self) -> &AircraftConstants {
        &self.constants
    }

    pub fn features(&self) -> ModelFeatures {
        self.features
    }

    pub fn diagnostics(&self) -> &FlightDiagnostics {
        &self.diagnostics
    }

    /// Advances `state` by `dt` seconds.
    ///
    /// A landed state is terminal: the call leaves it untouched and reports no
    /// telemetry.
    pub fn step(
        &mut self,
        state: &mut AircraftState,
        controls: &ControlInputs,
        environment: &EnvironmentParams,
        dt: f64,
    ) -> StepOutcome {
        if state.is_landed() {
            return StepOutcome {
                status: FlightStatus::Landed,
                touchdown: false,
                telemetry: None,
            };
        }

        let wind = if self.features.wind {
            environment.wind()
        } else {
            Vector2::zeros()
        };
        let air = AirDataValues::calculate(state, wind);

        let flaps = FlapEffects::from_setting(controls.flaps());
        let envelope = StallEnvelope::new(&self.constants, &flaps);
        let stall_model = self
            .features
            .effective_stall_mode(environment.stall_mode())
            .model();
        let coeffs = calculate_coefficients(&self.constants, &flaps, &envelope, stall_model, air.alpha);

        let mass = environment.mass();
        let forces = calculate_forces(
            &self.constants,
            &air,
            &coeffs,
            environment.air_density(self.constants.sea_level_density),
            controls.throttle(),
            state.pitch,
            mass,
        );
        integrate_state(state, forces.net, mass, dt);
        let touchdown = state.is_landed();
        if touchdown {
            info!(
                "Ground contact at t={:.2}s, x={:.1}m, speed={:.1}m/s",
                state.sim_time + dt,
                state.position.x,
                state.ground_speed()
            );
        }

        let stall_break = if coeffs.stalled {
            stall_model.pitch_break(envelope.overshoot(air.alpha))
        } else {
            0.0
        };
        state.pitch = update_pitch(
            state.pitch,
            &PitchInputs {
                elevator: controls.elevator(),
                trim: controls.trim_elevator(),
                cg_position: environment.cg_position(),
                stability_derivative: self.constants.pitch_stability_derivative,
                stall_break,
                alpha: air.alpha,
            },
        );

        state.sim_time += dt;

        self.diagnostics = FlightDiagnostics {
            angle_of_attack: air.alpha,
            flight_path_angle: air.gamma,
            airspeed: air.airspeed,
            cl: coeffs.cl,
            cd: coeffs.cd,
            stalled: coeffs.stalled,
            stall_warning: coeffs.stall_warning,
        };

        let telemetry = if state.sim_time >= self.next_log_time {
            self.next_log_time += self.telemetry_interval;
            Some(self.record(state, wind))
        } else {
            None
        };

        StepOutcome {
            status: state.status,
            touchdown,
            telemetry,
        }
    }

    fn record(&self, state: &AircraftState, wind: Vector2<f64>) -> TelemetryRecord {
        TelemetryRecord {
            sim_time: state.sim_time,
            x: state.position.x,
            altitude: state.altitude(),
            speed: state.ground_speed(),
            airspeed: self.diagnostics.airspeed,
            pitch_deg: state.pitch.to_degrees(),
            aoa_deg: self.diagnostics.angle_of_attack.to_degrees(),
            cl: self.diagnostics.cl,
            cd: self.diagnostics.cd,
            wind_x: wind.x,
            stall_warning: self.diagnostics.stall_warning,
            stalled: self.diagnostics.stalled,
        }
    }
}
