//! Center-of-mass frame helpers

use nalgebra::{Point2, Vector2};

use crate::body::Body;

/// Mass-weighted mean position and velocity of `bodies`.
///
/// Returns `None` when the total mass is zero (or there are no bodies).
pub fn barycenter(bodies: &[Body]) -> Option<(Point2<f64>, Vector2<f64>)> {
    let total_mass: f64 = bodies.iter().map(|b| b.mass).sum();
    if total_mass == 0.0 {
        return None;
    }

    let (weighted_pos, weighted_vel) = bodies.iter().fold(
        (Vector2::zeros(), Vector2::zeros()),
        |(pos, vel), b| (pos + b.position.coords * b.mass, vel + b.velocity * b.mass),
    );

    Some((
        Point2::from(weighted_pos / total_mass),
        weighted_vel / total_mass,
    ))
}

/// Shift every body into the zero-momentum frame centered on the barycenter.
///
/// Afterwards Σ m·x ≈ 0 and Σ m·v ≈ 0. Zero total mass leaves the bodies
/// untouched.
pub fn align_to_barycenter(bodies: &mut [Body]) {
    let Some((center, drift)) = barycenter(bodies) else {
        return;
    };

    for body in bodies.iter_mut() {
        body.position -= center.coords;
        body.velocity -= drift;
    }
}
