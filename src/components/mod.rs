pub mod aircraft;

pub use aircraft::{
    AircraftConfig, AircraftConstants, AircraftSource, AircraftState, AircraftType, ConfigError,
    FlightDiagnostics, FlightStatus, InitialConditions, MassClass, RawAircraftConfig,
};
