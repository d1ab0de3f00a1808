use bevy::prelude::*;

use crate::plugins::FlightSet;
use crate::resources::{LogObserver, TelemetryConfig, TelemetryObservers, TelemetryRecord};
use crate::systems::dispatch_telemetry;

/// Delivers telemetry records to the registered observers.
///
/// Observers inserted before this plugin is added are kept; the log observer
/// is appended when `log_records` is set.
pub struct TelemetryPlugin {
    config: TelemetryConfig,
}

impl Default for TelemetryPlugin {
    fn default() -> Self {
        Self::with_config(TelemetryConfig::default())
    }
}

impl TelemetryPlugin {
    pub fn with_config(config: TelemetryConfig) -> Self {
        Self { config }
    }
}

impl Plugin for TelemetryPlugin {
    fn build(&self, app: &mut App) {
        let mut observers = app
            .world_mut()
            .remove_resource::<TelemetryObservers>()
            .unwrap_or_default();
        if self.config.log_records {
            observers.register(LogObserver::new(self.config.format));
        }
        debug!("{} telemetry observer(s) registered", observers.len());

        app.add_event::<TelemetryRecord>()
            .insert_resource(observers)
            .add_systems(FixedUpdate, dispatch_telemetry.in_set(FlightSet::Report));
    }
}
