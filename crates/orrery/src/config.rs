//! Scenario files: the template list plus initial controller settings

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::template::{BodyTemplate, TemplateSet};

fn default_time_scale() -> f64 {
    1.0
}

fn default_running() -> bool {
    true
}

/// A scenario as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_time_scale")]
    pub time_scale: f64,
    #[serde(default = "default_running")]
    pub running: bool,
    pub bodies: Vec<BodyTemplate>,
}

impl SimulationConfig {
    /// Load a scenario, picking the format from the extension
    ///
    /// `.toml` files are read as TOML; anything else is read as YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading scenario");

        if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml_str(&contents)
        } else {
            let reader = File::open(path)?;
            Ok(serde_yaml::from_reader(reader)?)
        }
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validated template set for these bodies
    pub fn templates(&self) -> Result<TemplateSet> {
        TemplateSet::new(self.bodies.clone())
    }
}

impl Default for SimulationConfig {
    /// The built-in solar system at unit time scale, running
    fn default() -> Self {
        Self {
            time_scale: default_time_scale(),
            running: default_running(),
            bodies: TemplateSet::solar_system().templates().to_vec(),
        }
    }
}
