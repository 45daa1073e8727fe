use nalgebra::{Point2, Vector2};

use crate::color::Color;
use crate::trail::Trail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub color: Color,
    pub mass: f64,                  // Solar masses, editable at runtime
    pub base_mass: f64,             // Solar masses at creation
    pub radius: f64,                // Draw radius, no physical role
    pub alive: bool,                // Reserved, the integrator ignores it
    pub position: Point2<f64>,      // AU
    pub velocity: Vector2<f64>,     // AU/year
    pub acceleration: Vector2<f64>, // AU/year²
    trail: Trail,
}

impl Body {
    /// Creates a body at rest acceleration-wise, with an empty trail.
    ///
    /// `base_mass` is pinned to `mass`; later edits only touch `mass`.
    pub fn new(
        id: BodyId,
        name: impl Into<String>,
        color: Color,
        mass: f64,
        radius: f64,
        position: Point2<f64>,
        velocity: Vector2<f64>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            mass,
            base_mass: mass,
            radius,
            alive: true,
            position,
            velocity,
            acceleration: Vector2::zeros(),
            trail: Trail::new(),
        }
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Samples the current position into the trail (adaptive rate)
    pub fn record_trail(&mut self) {
        let speed = self.velocity.magnitude();
        self.trail.record(self.position, speed);
    }

    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }

    /// Angular momentum scalar (r × v, not multiplied by mass)
    /// In 2D, this returns the z-component of the angular momentum vector
    pub fn specific_angular_momentum(&self) -> f64 {
        self.position.x * self.velocity.y - self.position.y * self.velocity.x
    }
}
