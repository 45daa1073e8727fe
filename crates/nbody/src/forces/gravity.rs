//! Direct N-body gravity (O(N²) implementation)

use crate::body::Body;
use crate::forces::{ForceModel, G, SOFTENING};
use nalgebra::Vector2;

/// Direct O(N²) gravitational force computation with Plummer softening
///
/// Every unordered pair is visited once and the contribution is applied to
/// both bodies with opposite sign, so Newton's third law holds exactly
/// within a pass.
///
/// # Examples
///
/// ```
/// use nbody::forces::DirectGravity;
///
/// // The default softening keeps coincident bodies finite
/// let gravity = DirectGravity::new();
/// assert_eq!(gravity.softening, 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectGravity {
    /// Softening length (AU)
    pub softening: f64,
}

impl DirectGravity {
    /// Creates direct gravity with the standard softening length
    pub fn new() -> Self {
        Self {
            softening: SOFTENING,
        }
    }

    /// Creates a new direct gravity force with specified softening length
    ///
    /// # Arguments
    ///
    /// * `softening` - Softening length in AU
    pub fn with_softening(softening: f64) -> Self {
        Self { softening }
    }

    fn eps2(&self) -> f64 {
        self.softening * self.softening
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for DirectGravity {
    fn accumulate(&self, bodies: &[Body], out: &mut [Vector2<f64>]) {
        let eps2 = self.eps2();
        let n = bodies.len();

        for i in 0..n {
            let bi = &bodies[i];

            for j in (i + 1)..n {
                let bj = &bodies[j];

                // Points from i to j: i is pulled along +r, j along -r
                let r = bj.position - bi.position;
                let d2 = r.magnitude_squared() + eps2;
                let inv_d3 = (d2 * d2.sqrt()).recip();
                let coef = G * inv_d3;

                out[i] += r * (coef * bj.mass);
                out[j] -= r * (coef * bi.mass);
            }
        }
    }

    fn potential_energy(&self, bodies: &[Body]) -> f64 {
        let eps2 = self.eps2();

        // Each pair counted once
        bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                bodies[i + 1..].iter().map(move |b| {
                    let r = ((a.position - b.position).magnitude_squared() + eps2).sqrt();
                    -G * a.mass * b.mass / r
                })
            })
            .sum()
    }
}
