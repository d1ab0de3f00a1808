use approx::assert_relative_eq;
use skyhawk::{
    components::{AircraftConfig, AircraftConstants, InitialConditions, MassClass},
    physics::FlightModel,
    resources::{ControlCommand, EnvironmentParams, ModelFeatures, StallMode},
    systems::aerodynamics::{FlapEffects, StallEnvelope, AOA_LIMIT_DEG},
};

use crate::common::{
    assert_landed, assert_state_valid, assert_unstalled, environment_with_stall, short_final,
    trimmed_cruise, TestAppBuilder,
};

#[test]
fn test_spawns_at_initial_conditions() {
    let mut app = TestAppBuilder::new()
        .with_initial(InitialConditions::cruise())
        .build();

    let state = app.state();
    assert_eq!(state.position.x, 0.0);
    assert_eq!(state.altitude(), 1000.0);
    assert_eq!(state.velocity.x, 50.0);
    assert_eq!(state.sim_time, 0.0);
    assert_eq!(app.controls().throttle(), 0.65);

    let aircraft = app.query_single::<AircraftConfig>().unwrap();
    assert_eq!(aircraft.name, "Cessna172");
    assert!(app.query_single::<FlightModel>().is_some());
}

#[test]
fn test_trimmed_flight_holds_altitude() {
    let mut app = TestAppBuilder::new().with_initial(trimmed_cruise()).build();

    for _ in 0..60 {
        app.run_for(1.0);
        let state = app.state();
        assert_state_valid(&state);
        assert!(
            (state.altitude() - 1000.0).abs() < 10.0,
            "altitude drifted to {:.1} m at t={:.1}",
            state.altitude(),
            state.sim_time
        );
        let pitch = state.pitch.to_degrees();
        assert!(pitch > 2.0 && pitch < 6.0, "pitch drifted to {:.2}°", pitch);
        assert_unstalled(&app.diagnostics());
    }
    assert_relative_eq!(app.state().sim_time, 60.0, epsilon = 1e-6);
}

#[test]
fn test_full_back_stick_warns_before_stall() {
    let mut app = TestAppBuilder::new()
        .with_initial(InitialConditions::cruise())
        .with_environment(environment_with_stall(StallMode::Enhanced))
        .build();
    app.controls_mut().set_elevator(1.0).unwrap();

    let envelope = StallEnvelope::new(&AircraftConstants::cessna_172(), &FlapEffects::from_setting(0.0));
    let limit = AOA_LIMIT_DEG.to_radians();

    let mut first_warning = None;
    let mut first_stall = None;
    let mut was_stalled = false;
    for tick in 0..200 {
        app.run_steps(1);
        let diagnostics = app.diagnostics();
        let alpha = diagnostics.angle_of_attack.clamp(-limit, limit).abs();

        assert_eq!(
            diagnostics.stalled,
            alpha > envelope.stall_aoa,
            "stall flag disagrees with |α| = {:.3}° at tick {}",
            alpha.to_degrees(),
            tick
        );
        if was_stalled && !diagnostics.stalled {
            assert!(alpha <= envelope.stall_aoa, "stall cleared above the critical angle at tick {}", tick);
        }
        was_stalled = diagnostics.stalled;

        if diagnostics.stall_warning && first_warning.is_none() {
            first_warning = Some(tick);
        }
        if diagnostics.stalled && first_stall.is_none() {
            first_stall = Some(tick);
        }
        assert_state_valid(&app.state());
    }

    let first_warning = first_warning.expect("no stall warning");
    let first_stall = first_stall.expect("no stall");
    assert!(first_warning < first_stall);
    assert_relative_eq!(app.state().pitch.to_degrees(), 40.0, epsilon = 1e-9);
}

#[test]
fn test_enhanced_stall_loses_more_lift() {
    let stalled = InitialConditions::new(1000.0, 30.0, 0.5).with_pitch(40.0_f64.to_radians());

    let mut enhanced = TestAppBuilder::new()
        .with_initial(stalled)
        .with_environment(environment_with_stall(StallMode::Enhanced))
        .build();
    let mut basic = TestAppBuilder::new()
        .with_initial(stalled)
        .with_environment(environment_with_stall(StallMode::Basic))
        .build();
    enhanced.run_steps(1);
    basic.run_steps(1);

    let enhanced = enhanced.diagnostics();
    let basic = basic.diagnostics();
    assert!(enhanced.stalled && basic.stalled);
    assert!(enhanced.cl.abs() < basic.cl.abs());
}

#[test]
fn test_basic_features_fly_basic_stall() {
    let stalled = InitialConditions::new(1000.0, 30.0, 0.5).with_pitch(40.0_f64.to_radians());
    let mut app = TestAppBuilder::new()
        .with_initial(stalled)
        .with_environment(environment_with_stall(StallMode::Enhanced))
        .with_features(ModelFeatures::basic())
        .build();
    app.run_steps(1);

    assert_relative_eq!(app.diagnostics().cl, 0.7);
}

#[test]
fn test_landing_is_terminal() {
    let mut app = TestAppBuilder::new().with_initial(short_final()).build();

    app.run_steps(200);
    let state = app.state();
    assert_landed(&state);
    assert!(state.sim_time < 2.0);

    let landings = app.landings();
    assert_eq!(landings.len(), 1);
    assert_relative_eq!(landings[0].sim_time, state.sim_time);
    assert!(landings[0].ground_speed > 0.0);

    app.run_steps(50);
    assert_eq!(app.state(), state);
    assert_eq!(app.landings().len(), 1);
}

#[test]
fn test_control_commands_apply_before_step() {
    let mut app = TestAppBuilder::new()
        .with_initial(InitialConditions::cruise())
        .build();

    app.send_command(ControlCommand::ThrottleUp);
    app.send_command(ControlCommand::FlapsExtend);
    app.send_command(ControlCommand::ElevatorUp);
    app.run_steps(1);

    let controls = app.controls();
    assert_relative_eq!(controls.throttle(), 0.70, epsilon = 1e-12);
    assert_relative_eq!(controls.flaps(), 0.25);
    assert_relative_eq!(controls.elevator(), 0.1);

    // Commands are consumed once
    app.run_steps(1);
    assert_relative_eq!(app.controls().flaps(), 0.25);
}

#[test]
fn test_environment_changes_take_effect_next_tick() {
    let mut sea_level = TestAppBuilder::new().with_initial(trimmed_cruise()).build();
    let mut hot_day = TestAppBuilder::new().with_initial(trimmed_cruise()).build();
    hot_day.environment_mut().set_density_altitude(5000.0).unwrap();

    sea_level.run_for(5.0);
    hot_day.run_for(5.0);
    assert!(hot_day.state().altitude() < sea_level.state().altitude() - 5.0);
}

#[test]
fn test_heavier_aircraft_sinks() {
    let mut heavy_env = EnvironmentParams::default();
    heavy_env.set_mass_class(MassClass::Heavy).unwrap();
    let mut light_env = EnvironmentParams::default();
    light_env.set_mass_class(MassClass::Light).unwrap();

    let mut heavy = TestAppBuilder::new()
        .with_initial(trimmed_cruise())
        .with_environment(heavy_env)
        .build();
    let mut light = TestAppBuilder::new()
        .with_initial(trimmed_cruise())
        .with_environment(light_env)
        .build();
    heavy.run_for(5.0);
    light.run_for(5.0);

    assert!(heavy.state().altitude() < light.state().altitude());
}

#[test]
fn test_headwind_shortens_ground_track() {
    let mut windy_env = EnvironmentParams::default();
    windy_env.set_headwind(10.0).unwrap();

    let mut calm = TestAppBuilder::new().with_initial(trimmed_cruise()).build();
    let mut windy = TestAppBuilder::new()
        .with_initial(trimmed_cruise())
        .with_environment(windy_env)
        .build();
    calm.run_for(5.0);
    windy.run_for(5.0);

    assert!(windy.state().position.x < calm.state().position.x);
    assert!(windy.diagnostics().airspeed > calm.diagnostics().airspeed);
}
