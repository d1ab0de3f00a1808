use bevy::prelude::*;

use crate::components::{AircraftConfig, AircraftState, FlightDiagnostics};
use crate::physics::FlightModel;
use crate::plugins::FlightTerminated;
use crate::resources::{ControlCommand, SimulationConfig, TelemetryRecord};
use crate::systems::{apply_control_commands, flight_model_system};

/// Stages of one fixed tick.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    /// Operator commands are applied to the controls.
    Input,
    /// The flight model advances the aircraft.
    Step,
    /// Telemetry and termination are handled.
    Report,
}

/// Spawns the aircraft and steps it on the fixed schedule.
pub struct FlightModelPlugin {
    config: SimulationConfig,
}

impl Default for FlightModelPlugin {
    fn default() -> Self {
        Self::with_config(SimulationConfig::default())
    }
}

impl FlightModelPlugin {
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Spawns the aircraft entity at its initial conditions.
    ///
    /// # Arguments:
    /// * `commands` - Used to spawn the entity into the ECS.
    /// * `exit` - Signalled when the aircraft cannot be built.
    /// * `config` - Run configuration providing airframe, features and start state.
    fn setup_aircraft(
        mut commands: Commands,
        mut exit: EventWriter<AppExit>,
        config: &SimulationConfig,
    ) {
        let aircraft = match AircraftConfig::new(&config.aircraft) {
            Ok(aircraft) => aircraft,
            Err(e) => {
                error!("Failed to load aircraft: {}", e);
                exit.send(AppExit::error());
                return;
            }
        };

        let state = match AircraftState::from_initial(&config.initial) {
            Ok(state) => state,
            Err(e) => {
                error!("Invalid initial conditions: {}", e);
                exit.send(AppExit::error());
                return;
            }
        };
        let model = FlightModel::new(aircraft.constants, config.features)
            .with_telemetry_interval(config.telemetry.interval);

        info!(
            "Spawning {} at {:.0} m, {:.1} m/s, pitch {:.1}° ({:?})",
            aircraft.name,
            state.altitude(),
            state.ground_speed(),
            state.pitch.to_degrees(),
            config.features
        );

        commands.spawn((
            Name::new(aircraft.name.clone()),
            aircraft,
            model,
            state,
            FlightDiagnostics::default(),
        ));
    }
}

impl Plugin for FlightModelPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        app.insert_resource(self.config.clone())
            .insert_resource(Time::<Fixed>::from_seconds(self.config.timestep))
            .add_event::<ControlCommand>()
            .add_event::<TelemetryRecord>()
            .add_event::<FlightTerminated>()
            .configure_sets(
                FixedUpdate,
                (FlightSet::Input, FlightSet::Step, FlightSet::Report).chain(),
            )
            .add_systems(
                Startup,
                move |commands: Commands, exit: EventWriter<AppExit>| {
                    Self::setup_aircraft(commands, exit, &config)
                },
            )
            .add_systems(
                FixedUpdate,
                (
                    apply_control_commands.in_set(FlightSet::Input),
                    flight_model_system.in_set(FlightSet::Step),
                ),
            );
    }
}
