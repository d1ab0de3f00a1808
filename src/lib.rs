//! Longitudinal flight model of a light single-engine aircraft, run on a fixed
//! timestep inside a bevy app.

pub mod components;
pub mod physics;
pub mod plugins;
pub mod resources;
pub mod systems;
