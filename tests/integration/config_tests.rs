use bevy::prelude::*;
use pretty_assertions::assert_eq;
use skyhawk::{
    components::{AircraftConfig, AircraftSource, InitialConditions},
    physics::FlightModel,
    plugins::SimulationPlugin,
    resources::{ControlInputs, EnvironmentParams, SimulationConfig, StallMode},
};
use std::io::Write;
use tempfile::NamedTempFile;

use crate::common::{trimmed_cruise, TestAppBuilder};

const GLIDER_YAML: &str = "\
name: LongWing
wing_area: 24.0
lift_slope: 5.5
max_cl: 1.5
zero_lift_drag: 0.025
induced_drag_factor: 0.04
stall_aoa_deg: 16.0
max_thrust: 1700.0
pitch_stability_derivative: -0.05
";

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_yaml_config_drives_app() {
    let file = write_temp(
        "\
timestep: 0.02
telemetry:
  interval: 0.5
  format: Json
  log_records: false
initial:
  altitude: 300.0
  airspeed: 45.0
  throttle: 0.6
environment:
  density_altitude: 2000.0
  wind: [-5.0, 0.0]
  mass_class: Heavy
  cg_position: 0.5
  stall_mode: Enhanced
",
    );
    let config = SimulationConfig::load(file.path()).unwrap();
    assert_eq!(config.initial, InitialConditions::approach());

    let mut app = TestAppBuilder::new().with_config(config).build();
    let state = app.state();
    assert_eq!(state.altitude(), 300.0);

    let environment = app.app.world().resource::<EnvironmentParams>();
    assert_eq!(environment.mass(), 1400.0);
    assert_eq!(environment.stall_mode(), StallMode::Enhanced);
    assert_eq!(environment.wind().x, -5.0);
    assert_eq!(app.app.world().resource::<ControlInputs>().throttle(), 0.6);
}

#[test]
fn test_out_of_range_environment_is_clamped() {
    let mut config = SimulationConfig::default();
    config.telemetry.log_records = false;
    config.environment = serde_yaml::from_str("cg_position: 3.0\ndensity_altitude: 9000.0\n").unwrap();

    let app = TestAppBuilder::new().with_config(config).build();
    let environment = app.app.world().resource::<EnvironmentParams>();
    assert_eq!(environment.cg_position(), 1.0);
    assert_eq!(environment.density_altitude(), 5000.0);
}

#[test]
fn test_aircraft_from_file() {
    let file = write_temp(GLIDER_YAML);
    let config = SimulationConfig {
        initial: trimmed_cruise(),
        aircraft: AircraftSource::File(file.path().to_path_buf()),
        ..Default::default()
    };

    let mut app = TestAppBuilder::new().with_config(config).build();
    let aircraft = app.query_single::<AircraftConfig>().unwrap().clone();
    assert_eq!(aircraft.name, "LongWing");
    assert_eq!(aircraft.constants.wing_area, 24.0);

    let model = app.query_single::<FlightModel>().unwrap();
    assert_eq!(*model.constants(), aircraft.constants);

    let mut cessna = TestAppBuilder::new().with_initial(trimmed_cruise()).build();
    app.run_for(2.0);
    cessna.run_for(2.0);
    assert!(app.state().altitude() > cessna.state().altitude());
}

#[test]
fn test_missing_aircraft_file_requests_exit() {
    let config = SimulationConfig {
        aircraft: AircraftSource::File("/nonexistent/aircraft.yaml".into()),
        ..Default::default()
    };

    let mut app = TestAppBuilder::new().with_config(config).build();
    assert!(matches!(app.app.should_exit(), Some(AppExit::Error(_))));
    assert!(app.query_single::<FlightModel>().is_none());
}

#[test]
fn test_invalid_initial_conditions_request_exit() {
    let config = SimulationConfig {
        initial: InitialConditions::new(f64::NAN, 50.0, 0.4),
        ..Default::default()
    };

    let mut app = TestAppBuilder::new().with_config(config).build();
    assert!(matches!(app.app.should_exit(), Some(AppExit::Error(_))));
    assert!(app.query_single::<FlightModel>().is_none());
}

#[test]
fn test_invalid_config_rejected_by_plugin() {
    let config = SimulationConfig {
        initial: InitialConditions::new(-5.0, 50.0, 0.5),
        ..Default::default()
    };
    assert!(SimulationPlugin::try_with_config(config).is_err());
}
