pub mod features;
pub mod simulation;
pub mod telemetry;

pub use features::ModelFeatures;
pub use simulation::SimulationConfig;
pub use telemetry::{TelemetryConfig, TelemetryFormat};
