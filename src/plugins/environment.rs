use bevy::prelude::*;

use crate::resources::{ControlCommand, ControlInputs, EnvironmentParams, SimulationConfig};

/// Installs the operator-adjustable resources: pilot controls and environment.
pub struct EnvironmentPlugin {
    pub environment: EnvironmentParams,
    /// Throttle at release, the other controls start neutral.
    pub throttle: f64,
}

impl Default for EnvironmentPlugin {
    fn default() -> Self {
        Self::with_config(&SimulationConfig::default())
    }
}

impl EnvironmentPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &SimulationConfig) -> Self {
        Self {
            environment: config.environment.clone(),
            throttle: config.initial.throttle,
        }
    }

    fn build_environment(&self) -> EnvironmentParams {
        match self.environment.clone().validated() {
            Ok(environment) => environment,
            Err(e) => {
                error!("Invalid environment, using defaults: {}", e);
                EnvironmentParams::default()
            }
        }
    }

    fn build_controls(&self) -> ControlInputs {
        match ControlInputs::new(self.throttle) {
            Ok(controls) => controls,
            Err(e) => {
                error!("Invalid initial throttle, starting at idle: {}", e);
                ControlInputs::default()
            }
        }
    }
}

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        let environment = self.build_environment();
        let controls = self.build_controls();
        info!(
            "Environment: density altitude {:.0} m, wind ({:.1}, {:.1}) m/s, mass {:.0} kg, cg {:+.2}, stall {:?}",
            environment.density_altitude(),
            environment.wind().x,
            environment.wind().y,
            environment.mass(),
            environment.cg_position(),
            environment.stall_mode()
        );

        app.add_event::<ControlCommand>()
            .insert_resource(environment)
            .insert_resource(controls);
    }
}
