//! Error types for setting up a simulation

use thiserror::Error;

/// Result type for orrery operations
pub type Result<T, E = OrreryError> = std::result::Result<T, E>;

/// Errors surfaced while loading templates or building the initial state
///
/// Everything here happens before a `Simulation` exists; once built, the
/// controller's operations cannot fail.
#[derive(Debug, Error)]
pub enum OrreryError {
    #[error("no primary body: exactly one template must have no orbit")]
    MissingPrimary,

    #[error("more than one template without an orbit: {}", .0.join(", "))]
    MultiplePrimaries(Vec<String>),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
