pub mod config;
pub mod state;

pub use config::{
    AircraftConfig, AircraftConstants, AircraftSource, AircraftType, ConfigError,
    InitialConditions, MassClass, RawAircraftConfig,
};
pub use state::{AircraftState, FlightDiagnostics, FlightStatus};
