//! Force models for N-body simulations
//!
//! This module provides the `ForceModel` trait and the direct-summation
//! gravity used by the integrator.

use std::f64::consts::PI;

use crate::body::Body;
use nalgebra::Vector2;

pub mod gravity;


pub use gravity::DirectGravity;

/// Gravitational constant in AU³ M☉⁻¹ year⁻²
/// G = 4π² ≈ 39.478417
pub const G: f64 = 4.0 * PI * PI;

/// Plummer softening length (AU); its square is added to every squared
/// separation so coincident bodies never divide by zero
pub const SOFTENING: f64 = 1e-5;

/// A source of acceleration on bodies in an N-body system
///
/// Implementations add their contribution into `out`; they never reset it.
/// Use [`compute_accelerations`] for the zero-accumulate-store sequence.
///
/// # Examples
///
/// ```
/// use nbody::forces::{compute_accelerations, DirectGravity};
/// use nbody::state::SystemState;
/// use nbody::Color;
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new();
/// system.add_body("Sun", Color::WHITE, 1.0, 10.0, Point2::origin(), Vector2::zeros());
/// system.add_body("Earth", Color::WHITE, 3.0e-6, 2.0, Point2::new(1.0, 0.0), Vector2::zeros());
///
/// compute_accelerations(&DirectGravity::new(), &mut system.bodies);
/// assert!(system.bodies[1].acceleration.x < 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Add accelerations (AU/year²) for every body into `out`
    ///
    /// `out[i]` belongs to `bodies[i]`; both slices have the same length.
    fn accumulate(&self, bodies: &[Body], out: &mut [Vector2<f64>]);

    /// Compute potential energy contribution (optional)
    ///
    /// Default implementation returns 0.0.
    ///
    /// # Returns
    ///
    /// Potential energy in M☉ AU² year⁻²
    fn potential_energy(&self, _bodies: &[Body]) -> f64 {
        0.0
    }
}

/// Recompute every body's `acceleration` from scratch
///
/// Accelerations are zeroed first, so nothing carries over between calls,
/// and the whole pass reads one consistent set of positions.
pub fn compute_accelerations(force: &dyn ForceModel, bodies: &mut [Body]) {
    let mut accelerations = vec![Vector2::zeros(); bodies.len()];
    force.accumulate(bodies, &mut accelerations);

    bodies
        .iter_mut()
        .zip(accelerations)
        .for_each(|(body, accel)| body.acceleration = accel);
}
