use bevy::{core::TaskPoolPlugin, prelude::*};
use skyhawk::{
    components::{AircraftState, FlightDiagnostics, InitialConditions},
    plugins::{FlightTerminated, SimulationPlugin},
    resources::{
        ControlCommand, ControlInputs, EnvironmentParams, ModelFeatures, SimulationConfig,
        TelemetryObserver, TelemetryObservers,
    },
};

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: SimulationConfig,
    observers: TelemetryObservers,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        let mut config = SimulationConfig::default();
        config.telemetry.log_records = false;
        Self {
            config,
            observers: TelemetryObservers::new(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_initial(mut self, initial: InitialConditions) -> Self {
        self.config.initial = initial;
        self
    }

    pub fn with_environment(mut self, environment: EnvironmentParams) -> Self {
        self.config.environment = environment;
        self
    }

    pub fn with_features(mut self, features: ModelFeatures) -> Self {
        self.config.features = features;
        self
    }

    pub fn with_observer<O: TelemetryObserver + 'static>(mut self, observer: O) -> Self {
        self.observers.register(observer);
        self
    }

    pub fn build(self) -> TestApp {
        let timestep = self.config.timestep;
        let mut app = App::new();

        // No TimePlugin: FixedUpdate only runs when a test steps it.
        app.add_plugins(TaskPoolPlugin::default())
            .insert_resource(self.observers)
            .add_plugins(SimulationPlugin::with_config(self.config));

        // Run Startup to spawn the aircraft
        app.update();

        TestApp { app, timestep }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub timestep: f64,
}

impl TestApp {
    /// Runs `steps` fixed ticks.
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Runs the ticks covering `seconds` of simulated time.
    pub fn run_for(&mut self, seconds: f64) {
        let steps = (seconds / self.timestep).round() as usize;
        self.run_steps(steps);
    }

    pub fn send_command(&mut self, command: ControlCommand) {
        self.app.world_mut().send_event(command);
    }

    pub fn state(&mut self) -> AircraftState {
        self.query_single::<AircraftState>()
            .cloned()
            .expect("aircraft state not found")
    }

    pub fn diagnostics(&mut self) -> FlightDiagnostics {
        *self
            .query_single::<FlightDiagnostics>()
            .expect("flight diagnostics not found")
    }

    pub fn controls(&self) -> ControlInputs {
        *self.app.world().resource::<ControlInputs>()
    }

    pub fn controls_mut(&mut self) -> Mut<'_, ControlInputs> {
        self.app.world_mut().resource_mut::<ControlInputs>()
    }

    pub fn environment_mut(&mut self) -> Mut<'_, EnvironmentParams> {
        self.app.world_mut().resource_mut::<EnvironmentParams>()
    }

    /// Landing events sent so far.
    pub fn landings(&self) -> Vec<FlightTerminated> {
        self.app
            .world()
            .resource::<Events<FlightTerminated>>()
            .iter_current_update_events()
            .copied()
            .collect()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }
}
