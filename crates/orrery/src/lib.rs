//! Solar-system simulation controller built on the `nbody` core.
//!
//! A [`Simulation`] is set up from a list of [`BodyTemplate`]s (the single
//! orbit-less template is the primary), then stepped once per render frame.
//! Scenarios can be loaded from YAML or TOML through [`SimulationConfig`].

pub mod config;
pub mod error;
pub mod simulation;
pub mod snapshot;
pub mod template;

pub use config::SimulationConfig;
pub use error::{OrreryError, Result};
pub use simulation::{Simulation, BASE_DT, TIME_SCALES};
pub use snapshot::{BodySnapshot, SimulationSnapshot, TrailSnapshot};
pub use template::{BodyTemplate, TemplateSet};

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod snapshot_test;
