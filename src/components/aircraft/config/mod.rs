mod aircraft;
mod constants;
mod loader;
mod mass;
mod start;

pub use aircraft::{AircraftConfig, AircraftSource, AircraftType};
pub use constants::AircraftConstants;
pub use loader::{ConfigError, RawAircraftConfig};
pub use mass::MassClass;
pub use start::InitialConditions;
