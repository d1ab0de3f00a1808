use std::sync::{Arc, Mutex};

use skyhawk::{
    components::InitialConditions,
    resources::{EnvironmentParams, StallMode, TelemetryRecord},
};

/// Shared sink filled by [`recorder`].
pub type Recorded = Arc<Mutex<Vec<TelemetryRecord>>>;

/// Level flight at 1000 m that holds altitude without pilot input.
pub fn trimmed_cruise() -> InitialConditions {
    InitialConditions::new(1000.0, 50.0, 0.75)
}

/// Low, slow and unpowered, touches down within two seconds.
pub fn short_final() -> InitialConditions {
    InitialConditions::new(10.0, 40.0, 0.0).with_pitch((-5.0_f64).to_radians())
}

pub fn environment_with_stall(mode: StallMode) -> EnvironmentParams {
    let mut environment = EnvironmentParams::default();
    environment.set_stall_mode(mode);
    environment
}

/// Telemetry observer that keeps every record it sees.
pub fn recorder() -> (impl FnMut(&TelemetryRecord) + Send + Sync, Recorded) {
    let records: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&records);
    let observer = move |record: &TelemetryRecord| {
        sink.lock().unwrap().push(*record);
    };
    (observer, records)
}
