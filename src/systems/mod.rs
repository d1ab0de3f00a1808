pub mod aerodynamics;
mod flight;
pub mod physics;
mod telemetry;

pub use flight::{apply_control_commands, flight_model_system};
pub use telemetry::dispatch_telemetry;
