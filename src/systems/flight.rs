use bevy::prelude::*;

use crate::components::{AircraftState, FlightDiagnostics};
use crate::physics::FlightModel;
use crate::plugins::FlightTerminated;
use crate::resources::{
    ControlCommand, ControlInputs, EnvironmentParams, SimulationConfig, TelemetryRecord,
};

/// Applies queued operator commands to the control inputs before the tick.
pub fn apply_control_commands(
    mut commands: EventReader<ControlCommand>,
    mut controls: ResMut<ControlInputs>,
) {
    for command in commands.read() {
        controls.apply(*command);
        debug!("Applied {:?}: {:?}", command, *controls);
    }
}

/// Advances every airborne aircraft by one fixed timestep.
pub fn flight_model_system(
    mut query: Query<(
        Entity,
        &mut FlightModel,
        &mut AircraftState,
        &mut FlightDiagnostics,
    )>,
    controls: Res<ControlInputs>,
    environment: Res<EnvironmentParams>,
    config: Res<SimulationConfig>,
    mut telemetry: EventWriter<TelemetryRecord>,
    mut terminated: EventWriter<FlightTerminated>,
) {
    let dt = config.timestep;

    for (entity, mut model, mut state, mut diagnostics) in query.iter_mut() {
        if state.is_landed() {
            continue;
        }

        let outcome = model.step(&mut state, &controls, &environment, dt);
        *diagnostics = *model.diagnostics();

        if let Some(record) = outcome.telemetry {
            telemetry.send(record);
        }

        if outcome.touchdown {
            terminated.send(FlightTerminated {
                entity,
                sim_time: state.sim_time,
                distance: state.position.x,
                ground_speed: state.ground_speed(),
            });
        }
    }
}
