//! WASM bindings for the orrery simulation.
//!
//! A JavaScript host creates one [`Orrery`] per canvas, calls `step` once per
//! animation frame and reads a snapshot back for drawing. The handle owns its
//! simulation; dropping it on the JS side (`free()`) releases everything.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! const orrery = new Orrery();
//!
//! function frame() {
//!   orrery.step(4);
//!   const { bodies, time } = orrery.snapshot();
//!   draw(bodies, time);
//!   requestAnimationFrame(frame);
//! }
//!
//! // Drop a comet in at 3 AU
//! orrery.addBody(3.0, 0.0, 0.0, 3.2, 1e-9, 3, "Comet", "#FFFFFF");
//! ```

use nalgebra::{Point2, Vector2};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use nbody::Color;
use orrery::{BodySnapshot, BodyTemplate, Simulation, SimulationConfig};

// =============================================================================
// Serialization helpers
// =============================================================================

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn parse_color(hex: &str) -> Result<Color, JsError> {
    hex.parse::<Color>().map_err(|e| JsError::new(&e.to_string()))
}

// =============================================================================
// Simulation handle
// =============================================================================

/// One running simulation
#[wasm_bindgen]
pub struct Orrery {
    sim: Simulation,
}

#[wasm_bindgen]
impl Orrery {
    /// The Sun and the eight planets
    #[wasm_bindgen(constructor)]
    pub fn new() -> Orrery {
        Orrery {
            sim: Simulation::solar_system(),
        }
    }

    /// Build from an array of templates
    /// (`{name, color, base_mass, radius_draw, orbit?}`)
    #[wasm_bindgen(js_name = fromTemplates)]
    pub fn from_templates(templates: JsValue) -> Result<Orrery, JsError> {
        let templates: Vec<BodyTemplate> = from_js(templates)?;
        let sim = Simulation::setup(templates).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Orrery { sim })
    }

    /// Build from a YAML scenario document
    #[wasm_bindgen(js_name = fromYaml)]
    pub fn from_yaml(source: &str) -> Result<Orrery, JsError> {
        let config =
            SimulationConfig::from_yaml_str(source).map_err(|e| JsError::new(&e.to_string()))?;
        let sim = Simulation::from_config(&config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Orrery { sim })
    }

    /// Advance `steps` fixed steps; nothing happens while paused
    ///
    /// # Returns
    /// Current simulation time in years
    pub fn step(&mut self, steps: usize) -> f64 {
        self.sim.step(steps);
        self.sim.time()
    }

    pub fn reset(&mut self) {
        self.sim.reset();
    }

    /// Add a body at explicit coordinates (AU, AU/year, solar masses)
    ///
    /// # Returns
    /// The new body's ID
    #[wasm_bindgen(js_name = addBody)]
    #[allow(clippy::too_many_arguments)]
    pub fn add_body(
        &mut self,
        x: f64,
        y: f64,
        vx: f64,
        vy: f64,
        mass: f64,
        radius: f64,
        name: String,
        color: &str,
    ) -> Result<u32, JsError> {
        let color = parse_color(color)?;
        let id = self.sim.add_body(
            Point2::new(x, y),
            Vector2::new(vx, vy),
            mass,
            radius,
            name,
            color,
        );
        Ok(id.0)
    }

    /// # Returns
    /// true if a body was at `index`
    #[wasm_bindgen(js_name = removeBody)]
    pub fn remove_body(&mut self, index: usize) -> bool {
        self.sim.remove_body(index).is_some()
    }

    #[wasm_bindgen(js_name = updateMass)]
    pub fn update_mass(&mut self, index: usize, mass: f64) {
        self.sim.update_mass(index, mass);
    }

    #[wasm_bindgen(js_name = updateRadius)]
    pub fn update_radius(&mut self, index: usize, radius: f64) {
        self.sim.update_radius(index, radius);
    }

    #[wasm_bindgen(js_name = updateColor)]
    pub fn update_color(&mut self, index: usize, color: &str) -> Result<(), JsError> {
        let color = parse_color(color)?;
        self.sim.update_color(index, color);
        Ok(())
    }

    #[wasm_bindgen(js_name = clearTrails)]
    pub fn clear_trails(&mut self) {
        self.sim.clear_trails();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.sim.is_running()
    }

    #[wasm_bindgen(js_name = setRunning)]
    pub fn set_running(&mut self, running: bool) {
        self.sim.set_running(running);
    }

    #[wasm_bindgen(js_name = toggleRunning)]
    pub fn toggle_running(&mut self) -> bool {
        self.sim.toggle_running()
    }

    #[wasm_bindgen(js_name = timeScale)]
    pub fn time_scale(&self) -> f64 {
        self.sim.time_scale()
    }

    #[wasm_bindgen(js_name = setTimeScale)]
    pub fn set_time_scale(&mut self, time_scale: f64) {
        self.sim.set_time_scale(time_scale);
    }

    /// Next time-scale preset, wrapping around
    #[wasm_bindgen(js_name = cycleTimeScale)]
    pub fn cycle_time_scale(&mut self) -> f64 {
        self.sim.cycle_time_scale()
    }

    /// Simulated years since setup or the last reset
    pub fn time(&self) -> f64 {
        self.sim.time()
    }

    #[wasm_bindgen(js_name = stepCount)]
    pub fn step_count(&self) -> u64 {
        self.sim.step_count()
    }

    #[wasm_bindgen(js_name = bodyCount)]
    pub fn body_count(&self) -> usize {
        self.sim.bodies().len()
    }

    /// Complete state: time, controller flags, bodies with trails, energy
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        to_js(&self.sim.snapshot())
    }

    /// Bodies only, for drawing
    pub fn bodies(&self) -> Result<JsValue, JsError> {
        let bodies: Vec<BodySnapshot> = self.sim.bodies().iter().map(BodySnapshot::from).collect();
        to_js(&bodies)
    }

    /// Trail of the body at `index` as flat `[x0, y0, x1, y1, ...]`, oldest
    /// first; empty when out of range
    #[wasm_bindgen(js_name = trailPoints)]
    pub fn trail_points(&self, index: usize) -> Vec<f64> {
        self.sim
            .body(index)
            .map(|body| body.trail().points().flat_map(|p| [p.x, p.y]).collect())
            .unwrap_or_default()
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Orbital helpers
// =============================================================================

/// Circular orbital speed in AU/year at `radius` AU from `central_mass` M☉
#[wasm_bindgen(js_name = circularVelocity)]
pub fn circular_velocity(central_mass: f64, radius: f64) -> f64 {
    nbody::kepler::circular_velocity(central_mass, radius)
}

/// Orbital period in years of a circular orbit at `radius` AU
#[wasm_bindgen(js_name = orbitalPeriod)]
pub fn orbital_period(central_mass: f64, radius: f64) -> f64 {
    nbody::kepler::orbital_period(central_mass, radius)
}
