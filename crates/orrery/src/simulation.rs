//! The simulation controller
//!
//! [`Simulation`] owns the body registry and the template set it was built
//! from, and drives the integrator one fixed half-day step at a time.
//! Every mutation goes through `&mut self`, between frames.

use nalgebra::{Point2, Vector2};
use nbody::barycenter::align_to_barycenter;
use nbody::forces::{compute_accelerations, DirectGravity, ForceModel};
use nbody::integrator::{Integrator, VelocityVerlet};
use nbody::state::SystemState;
use nbody::{Body, BodyId, Color};
use tracing::{debug, info, trace};

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::snapshot::{BodySnapshot, SimulationSnapshot};
use crate::template::{BodyTemplate, TemplateSet};

/// Fixed integration step: half a day, in years
pub const BASE_DT: f64 = 0.5 / 365.0;

/// Presets walked by [`Simulation::cycle_time_scale`]
pub const TIME_SCALES: [f64; 7] = [0.25, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0];

#[derive(Debug, Clone)]
pub struct Simulation {
    templates: TemplateSet,
    state: SystemState,
    integrator: VelocityVerlet,
    force: DirectGravity,
    running: bool,
    time_scale: f64,
    time: f64,
    step_count: u64,
}

impl Simulation {
    /// Builds a running simulation from a validated template set
    pub fn new(templates: TemplateSet) -> Self {
        let force = DirectGravity::new();
        let state = build_state(&templates, &force);
        info!(bodies = state.body_count(), "simulation set up");

        Self {
            templates,
            state,
            integrator: VelocityVerlet,
            force,
            running: true,
            time_scale: 1.0,
            time: 0.0,
            step_count: 0,
        }
    }

    /// Validates `templates` and builds a simulation from them
    ///
    /// # Errors
    ///
    /// Fails if the list has no primary or more than one.
    pub fn setup(templates: Vec<BodyTemplate>) -> Result<Self> {
        Ok(Self::new(TemplateSet::new(templates)?))
    }

    /// Builds a simulation with the scenario's bodies and initial settings
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        let mut simulation = Self::new(config.templates()?);
        simulation.running = config.running;
        simulation.time_scale = config.time_scale;
        Ok(simulation)
    }

    /// The Sun and the eight planets
    pub fn solar_system() -> Self {
        Self::new(TemplateSet::solar_system())
    }

    /// Advances `steps` fixed steps
    ///
    /// Does nothing while paused. Each step adds `BASE_DT · time_scale` to
    /// the clock, whatever the number of bodies.
    pub fn step(&mut self, steps: usize) {
        if !self.running {
            return;
        }

        for _ in 0..steps {
            self.integrator.step(&mut self.state, BASE_DT, &self.force);
            self.time += BASE_DT * self.time_scale;
            self.step_count += 1;
        }
    }

    /// Rebuilds every body from the templates and restarts the clock
    ///
    /// Runtime additions, removals and edits are discarded. The simulation
    /// resumes running; the time scale is kept.
    pub fn reset(&mut self) {
        self.state = build_state(&self.templates, &self.force);
        self.time = 0.0;
        self.step_count = 0;
        self.running = true;
        info!(bodies = self.state.body_count(), "simulation reset");
    }

    /// Appends a body at explicit coordinates
    ///
    /// The body starts with zero acceleration and an empty trail; the frame
    /// is not re-centered, so a massive addition makes the system drift.
    pub fn add_body(
        &mut self,
        position: Point2<f64>,
        velocity: Vector2<f64>,
        mass: f64,
        radius: f64,
        name: impl Into<String>,
        color: Color,
    ) -> BodyId {
        let name = name.into();
        debug!(%name, mass, x = position.x, y = position.y, "adding body");
        self.state.add_body(name, color, mass, radius, position, velocity)
    }

    /// Removes the body at `index`; out of range is ignored
    pub fn remove_body(&mut self, index: usize) -> Option<Body> {
        let removed = self.state.remove_body(index);
        match &removed {
            Some(body) => debug!(index, name = %body.name, "removed body"),
            None => trace!(index, "remove_body: index out of range"),
        }
        removed
    }

    /// Sets the mass used from the next force evaluation on
    pub fn update_mass(&mut self, index: usize, mass: f64) {
        if !self.state.update_mass(index, mass) {
            trace!(index, "update_mass: index out of range");
        }
    }

    pub fn update_radius(&mut self, index: usize, radius: f64) {
        if !self.state.update_radius(index, radius) {
            trace!(index, "update_radius: index out of range");
        }
    }

    pub fn update_color(&mut self, index: usize, color: Color) {
        if !self.state.update_color(index, color) {
            trace!(index, "update_color: index out of range");
        }
    }

    pub fn clear_trails(&mut self) {
        self.state.clear_trails();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Flips the running flag and returns the new value
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Sets the clock multiplier; the integration step itself never changes
    pub fn set_time_scale(&mut self, time_scale: f64) {
        self.time_scale = time_scale;
    }

    /// Moves to the next preset in [`TIME_SCALES`], wrapping around
    ///
    /// A value that is not a preset restarts at the first one.
    pub fn cycle_time_scale(&mut self) -> f64 {
        let next = TIME_SCALES
            .iter()
            .position(|&s| s == self.time_scale)
            .map_or(0, |i| (i + 1) % TIME_SCALES.len());
        self.time_scale = TIME_SCALES[next];
        self.time_scale
    }

    /// Simulated years since setup or the last reset
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn bodies(&self) -> &[Body] {
        &self.state.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.state.body(index)
    }

    pub fn state(&self) -> &SystemState {
        &self.state
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.state.kinetic_energy()
    }

    pub fn potential_energy(&self) -> f64 {
        self.force.potential_energy(&self.state.bodies)
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    pub fn snapshot(&self) -> SimulationSnapshot {
        let kinetic_energy = self.kinetic_energy();
        let potential_energy = self.potential_energy();
        let momentum = self.state.total_momentum();

        SimulationSnapshot {
            time: self.time,
            time_scale: self.time_scale,
            running: self.running,
            step_count: self.step_count,
            bodies: self.state.bodies.iter().map(BodySnapshot::from).collect(),
            kinetic_energy,
            potential_energy,
            total_energy: kinetic_energy + potential_energy,
            momentum: [momentum.x, momentum.y],
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::solar_system()
    }
}

/// Instantiates the templates, moves to the barycentric frame and evaluates
/// the initial accelerations
fn build_state(templates: &TemplateSet, force: &dyn ForceModel) -> SystemState {
    let mut state = templates.instantiate();
    align_to_barycenter(&mut state.bodies);
    compute_accelerations(force, &mut state.bodies);
    state
}
