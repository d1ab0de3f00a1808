use serde::{Deserialize, Serialize};

use crate::resources::StallMode;

/// Optional capabilities of the flight model.
///
/// `full()` is the richer model with wind coupling and the selectable enhanced
/// stall. `basic()` is the earlier revision: still air and the abrupt stall only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelFeatures {
    /// Subtract the wind vector from inertial velocity to get the relative airflow.
    pub wind: bool,
    /// Honour `StallMode::Enhanced` from the environment.
    pub enhanced_stall: bool,
}

impl Default for ModelFeatures {
    fn default() -> Self {
        Self::full()
    }
}

impl ModelFeatures {
    pub fn full() -> Self {
        Self {
            wind: true,
            enhanced_stall: true,
        }
    }

    pub fn basic() -> Self {
        Self {
            wind: false,
            enhanced_stall: false,
        }
    }

    /// Stall mode actually flown, given what the operator selected.
    pub fn effective_stall_mode(&self, requested: StallMode) -> StallMode {
        if self.enhanced_stall {
            requested
        } else {
            StallMode::Basic
        }
    }
}
