mod environment;
mod events;
mod flight;
mod simulation;
mod telemetry;

pub use environment::EnvironmentPlugin;
pub use events::FlightTerminated;
pub use flight::{FlightModelPlugin, FlightSet};
pub use simulation::SimulationPlugin;
pub use telemetry::TelemetryPlugin;
