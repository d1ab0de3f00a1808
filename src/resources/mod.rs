pub mod config;
mod controls;
mod environment;
pub mod errors;
mod telemetry;

pub use config::{ModelFeatures, SimulationConfig, TelemetryConfig, TelemetryFormat};
pub use controls::{ControlCommand, ControlInputs};
pub use environment::{EnvironmentParams, StallMode};
pub use errors::ParameterError;
pub use telemetry::{
    ChannelObserver, LogObserver, TelemetryObserver, TelemetryObservers, TelemetryRecord,
};
