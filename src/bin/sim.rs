use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use std::{env, error::Error, path::PathBuf, time::Duration};

use skyhawk::{
    components::{AircraftState, InitialConditions},
    plugins::{FlightSet, FlightTerminated, SimulationPlugin},
    resources::{ModelFeatures, SimulationConfig, TelemetryFormat},
};

const USAGE: &str =
    "usage: skyhawk_sim [config.yaml] [--preset cruise|approach] [--seconds N] [--json] [--basic]";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    preset: Option<String>,
    seconds: Option<f64>,
    json: bool,
    basic: bool,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = Args::default();
    let mut iter = env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--preset" => args.preset = Some(iter.next().ok_or("--preset needs a name")?),
            "--seconds" => {
                let value = iter.next().ok_or("--seconds needs a value")?;
                let seconds: f64 = value.parse()?;
                if !seconds.is_finite() || seconds <= 0.0 {
                    return Err(format!("--seconds must be positive, got {}", value).into());
                }
                args.seconds = Some(seconds);
            }
            "--json" => args.json = true,
            "--basic" => args.basic = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option {}\n{}", flag, USAGE).into())
            }
            path => args.config = Some(PathBuf::from(path)),
        }
    }

    Ok(args)
}

fn build_config(args: &Args) -> Result<SimulationConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(name) = &args.preset {
        config.initial = InitialConditions::preset(name)
            .ok_or_else(|| format!("unknown preset '{}', expected cruise or approach", name))?;
    }
    if args.json {
        config.telemetry.format = TelemetryFormat::Json;
    }
    if args.basic {
        config.features = ModelFeatures::basic();
    }

    config.validate()?;
    Ok(config)
}

/// Simulated time after which the run stops, if any.
#[derive(Resource)]
struct RunLimit(Option<f64>);

fn exit_on_landing(mut landed: EventReader<FlightTerminated>, mut exit: EventWriter<AppExit>) {
    for event in landed.read() {
        info!(
            "Landed after {:.1} s, {:.0} m flown, {:.1} m/s at contact",
            event.sim_time, event.distance, event.ground_speed
        );
        exit.send(AppExit::Success);
    }
}

fn exit_after_limit(
    limit: Res<RunLimit>,
    aircraft: Query<&AircraftState>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(seconds) = limit.0 else {
        return;
    };
    if let Ok(state) = aircraft.get_single() {
        if state.sim_time >= seconds {
            info!(
                "Stopping at t={:.1} s, altitude {:.1} m",
                state.sim_time,
                state.altitude()
            );
            exit.send(AppExit::Success);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args()?;
    let config = build_config(&args)?;
    let timestep = config.timestep;

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            timestep,
        ))),
        LogPlugin::default(),
    ))
    .add_plugins(SimulationPlugin::with_config(config))
    .insert_resource(RunLimit(args.seconds))
    .add_systems(
        FixedUpdate,
        (exit_on_landing, exit_after_limit).after(FlightSet::Report),
    );

    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(format!("simulation exited with code {}", code).into()),
    }
}
