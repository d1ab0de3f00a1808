use bevy::prelude::*;

use crate::resources::{TelemetryObservers, TelemetryRecord};

/// Hands each telemetry record of this tick to the registered observers.
pub fn dispatch_telemetry(
    mut records: EventReader<TelemetryRecord>,
    mut observers: ResMut<TelemetryObservers>,
) {
    for record in records.read() {
        observers.notify(record);
    }
}
