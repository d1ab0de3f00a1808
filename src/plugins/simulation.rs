use bevy::prelude::*;

use crate::components::ConfigError;
use crate::plugins::{EnvironmentPlugin, FlightModelPlugin, TelemetryPlugin};
use crate::resources::SimulationConfig;

/// Complete headless flight simulation: environment, flight model and telemetry.
///
/// Scheduling plugins (`MinimalPlugins` or `DefaultPlugins`) are left to the caller.
pub struct SimulationPlugin {
    config: SimulationConfig,
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self::with_config(SimulationConfig::default())
    }
}

impl SimulationPlugin {
    /// Uses `config` as given. Call [`SimulationConfig::validate`] first for
    /// configurations that did not come from [`SimulationConfig::load`].
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Validates `config` before building the plugin.
    pub fn try_with_config(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        info!(
            "Simulation at {:.0} Hz, telemetry every {:.1} s",
            self.config.tick_rate(),
            self.config.telemetry.interval
        );

        app.add_plugins((
            EnvironmentPlugin::with_config(&self.config),
            FlightModelPlugin::with_config(self.config.clone()),
            TelemetryPlugin::with_config(self.config.telemetry.clone()),
        ));
    }
}
