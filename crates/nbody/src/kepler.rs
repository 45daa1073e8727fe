//! Planar Keplerian elements and their conversion to state vectors
//!
//! Initial conditions are derived from heliocentric mean elements
//! (semi-major axis, eccentricity, longitude of perihelion, mean longitude).
//! The model is two-dimensional: the orbit is only rotated by the longitude
//! of perihelion, inclination and node are ignored.

use std::f64::consts::{PI, TAU};

use nalgebra::{Point2, Rotation2, Vector2};
use serde::{Deserialize, Serialize};

use crate::forces::G;

/// Iteration budget of the Newton-Raphson Kepler solver
pub const KEPLER_MAX_ITERATIONS: usize = 30;

/// Correction magnitude below which the solver stops early (radians)
pub const KEPLER_TOLERANCE: f64 = 1e-9;

/// Mean orbital elements of a body around its primary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// a (AU)
    pub semi_major_axis: f64,
    /// e (dimensionless, 0 = circular)
    pub eccentricity: f64,
    /// ϖ (degrees)
    pub longitude_of_perihelion: f64,
    /// L (degrees)
    pub mean_longitude: f64,
}

/// Position and velocity relative to the primary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalState {
    pub position: Point2<f64>,  // AU
    pub velocity: Vector2<f64>, // AU/year
}

impl OrbitalElements {
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        longitude_of_perihelion: f64,
        mean_longitude: f64,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            longitude_of_perihelion,
            mean_longitude,
        }
    }

    /// Circular orbit of radius `a` starting at angle `mean_longitude`
    pub fn circular(semi_major_axis: f64, mean_longitude: f64) -> Self {
        Self::new(semi_major_axis, 0.0, 0.0, mean_longitude)
    }

    /// Mean anomaly M = L − ϖ, normalized, in radians
    pub fn mean_anomaly(&self) -> f64 {
        normalize_degrees(self.mean_longitude - self.longitude_of_perihelion).to_radians()
    }

    /// Mean motion (radians per year) for gravitational parameter `mu`
    pub fn mean_motion(&self, mu: f64) -> f64 {
        (mu / self.semi_major_axis.powi(3)).sqrt()
    }

    /// Orbital period (years) for gravitational parameter `mu`
    pub fn period(&self, mu: f64) -> f64 {
        TAU / self.mean_motion(mu)
    }

    /// Position and velocity in the primary-centered frame.
    ///
    /// Uses μ = G·(central_mass + body_mass) with masses in solar masses.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::kepler::OrbitalElements;
    ///
    /// let orbit = OrbitalElements::circular(1.0, 0.0);
    /// let state = orbit.state_vector(1.0, 0.0);
    ///
    /// assert!((state.position.x - 1.0).abs() < 1e-12);
    /// // Circular speed at 1 AU around one solar mass is 2π AU/year
    /// assert!((state.velocity.y - std::f64::consts::TAU).abs() < 1e-9);
    /// ```
    pub fn state_vector(&self, central_mass: f64, body_mass: f64) -> OrbitalState {
        let a = self.semi_major_axis;
        let e = self.eccentricity;
        let mu = G * (central_mass + body_mass);

        let ea = solve_kepler(self.mean_anomaly(), e);
        let (sin_e, cos_e) = ea.sin_cos();
        let b_over_a = (1.0 - e * e).sqrt();

        // Perifocal frame: x points to perihelion
        let position = Vector2::new(a * (cos_e - e), a * b_over_a * sin_e);

        let r = a * (1.0 - e * cos_e);
        let speed_factor = (mu * a).sqrt() / r;
        let velocity = Vector2::new(-sin_e, b_over_a * cos_e) * speed_factor;

        let rotation = Rotation2::new(self.longitude_of_perihelion.to_radians());

        OrbitalState {
            position: Point2::from(rotation * position),
            velocity: rotation * velocity,
        }
    }
}

/// Solve Kepler's equation E − e·sin(E) = M for the eccentric anomaly.
///
/// Newton-Raphson starting from M (or π for e ≥ 0.8). When the iteration
/// budget runs out the current estimate is returned as is.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let m = mean_anomaly;
    let e = eccentricity;

    let mut ea = if e < 0.8 { m } else { PI };

    for _ in 0..KEPLER_MAX_ITERATIONS {
        let f = ea - e * ea.sin() - m;
        let fp = 1.0 - e * ea.cos();
        let delta = f / fp;
        ea -= delta;

        if delta.abs() < KEPLER_TOLERANCE {
            return ea;
        }
    }

    tracing::debug!(
        mean_anomaly = m,
        eccentricity = e,
        estimate = ea,
        "Kepler solver hit its iteration budget"
    );
    ea
}

/// Normalize an angle into [0, 360) degrees
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle % 360.0;
    if a >= 0.0 {
        return a;
    }
    // A tiny negative remainder rounds up to exactly 360
    let wrapped = a + 360.0;
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Circular orbital velocity (AU/year) at `radius` AU around `central_mass` M☉
pub fn circular_velocity(central_mass: f64, radius: f64) -> f64 {
    (G * central_mass / radius).sqrt()
}

/// Orbital period (years) of a circular orbit of `radius` AU
pub fn orbital_period(central_mass: f64, radius: f64) -> f64 {
    TAU * (radius.powi(3) / (G * central_mass)).sqrt()
}
