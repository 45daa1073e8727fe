//! Time integration for N-body systems
//!
//! The integrator is velocity Verlet, a symplectic second-order scheme that
//! keeps energy bounded over thousands of orbits at a fixed step. One force
//! evaluation per step is shared by the two velocity half-kicks.
//!
//! Integrators only move bodies; the simulation clock is owned by the caller.

use crate::forces::{compute_accelerations, ForceModel};
use crate::state::SystemState;

/// A time integrator for N-body systems
pub trait Integrator: Send + Sync {
    /// Advance the system by one timestep
    ///
    /// # Arguments
    ///
    /// * `state` - Current system state (modified in place)
    /// * `dt` - Timestep in years
    /// * `force` - Force model to compute accelerations
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel);

    /// Advance the system by multiple timesteps
    fn integrate(&self, state: &mut SystemState, dt: f64, n_steps: usize, force: &dyn ForceModel) {
        for _ in 0..n_steps {
            self.step(state, dt, force);
        }
    }
}

/// Velocity Verlet with trail recording
///
/// Expects `acceleration` on every body to match the current positions when
/// a step starts (the previous step, or the initial force pass, leaves it
/// that way). Each step runs:
///
/// 1. x(t + dt) = x(t) + v(t)·dt + ½·a(t)·dt², v ← v(t) + ½·a(t)·dt
/// 2. a(t + dt) from the new positions
/// 3. v(t + dt) = v + ½·a(t + dt)·dt
/// 4. every body offers its new position to its trail
///
/// # Examples
///
/// ```
/// use nbody::forces::{compute_accelerations, DirectGravity};
/// use nbody::integrator::{Integrator, VelocityVerlet};
/// use nbody::kepler::circular_velocity;
/// use nbody::state::SystemState;
/// use nbody::Color;
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new();
/// system.add_body("Sun", Color::WHITE, 1.0, 10.0, Point2::origin(), Vector2::zeros());
/// let v = circular_velocity(1.0, 1.0);
/// system.add_body("Earth", Color::WHITE, 0.0, 2.0, Point2::new(1.0, 0.0), Vector2::new(0.0, v));
///
/// let force = DirectGravity::new();
/// compute_accelerations(&force, &mut system.bodies);
///
/// VelocityVerlet.step(&mut system, 0.001, &force);
/// assert!(system.bodies[1].position.y > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocityVerlet;

impl Integrator for VelocityVerlet {
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel) {
        let half_dt = 0.5 * dt;

        // Drift with the old acceleration, first half-kick
        state.bodies.iter_mut().for_each(|body| {
            body.position += body.velocity * dt + body.acceleration * (half_dt * dt);
            body.velocity += body.acceleration * half_dt;
        });

        compute_accelerations(force, &mut state.bodies);

        // Second half-kick with the new acceleration
        state.bodies.iter_mut().for_each(|body| {
            body.velocity += body.acceleration * half_dt;
        });

        state.bodies.iter_mut().for_each(|body| body.record_trail());
    }
}
