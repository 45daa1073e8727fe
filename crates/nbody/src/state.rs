use crate::body::{Body, BodyId};
use crate::color::Color;
use nalgebra::{Point2, Vector2};

/// The body registry: every simulated body, in insertion order
///
/// Index-based mutators are bounds-checked and do nothing for an index that
/// is out of range; callers are usually UIs holding a recently valid index.
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    /// Bodies in insertion order
    pub bodies: Vec<Body>,
    /// Next available body ID
    next_id: u32,
}

impl SystemState {
    /// Creates an empty registry
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::state::SystemState;
    ///
    /// let system = SystemState::new();
    /// assert_eq!(system.body_count(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a body with zero acceleration and an empty trail
    ///
    /// # Arguments
    ///
    /// * `mass` - Body mass in solar masses (also recorded as its base mass)
    /// * `radius` - Draw radius
    /// * `position` - Position in AU
    /// * `velocity` - Velocity in AU/year
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::state::SystemState;
    /// use nbody::Color;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let mut system = SystemState::new();
    /// let id = system.add_body(
    ///     "Earth",
    ///     Color::new(46, 134, 255),
    ///     3.0e-6,
    ///     5.0,
    ///     Point2::new(1.0, 0.0),
    ///     Vector2::new(0.0, 6.28),
    /// );
    ///
    /// assert_eq!(system.body_count(), 1);
    /// assert_eq!(system.get_body(id).unwrap().name, "Earth");
    /// ```
    pub fn add_body(
        &mut self,
        name: impl Into<String>,
        color: Color,
        mass: f64,
        radius: f64,
        position: Point2<f64>,
        velocity: Vector2<f64>,
    ) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body::new(id, name, color, mass, radius, position, velocity));
        id
    }

    /// Removes the body at `index`, shifting later bodies down
    ///
    /// Returns `None` (and changes nothing) if `index` is out of range.
    pub fn remove_body(&mut self, index: usize) -> Option<Body> {
        (index < self.bodies.len()).then(|| self.bodies.remove(index))
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    /// Gets a reference to a body by ID
    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Current index of the body with `id`
    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    /// Sets the gravitational mass of the body at `index`
    ///
    /// Takes effect at the next force evaluation. Returns whether a body
    /// was updated.
    pub fn update_mass(&mut self, index: usize, mass: f64) -> bool {
        match self.body_mut(index) {
            Some(body) => {
                body.mass = mass;
                true
            }
            None => false,
        }
    }

    pub fn update_radius(&mut self, index: usize, radius: f64) -> bool {
        match self.body_mut(index) {
            Some(body) => {
                body.radius = radius;
                true
            }
            None => false,
        }
    }

    pub fn update_color(&mut self, index: usize, color: Color) -> bool {
        match self.body_mut(index) {
            Some(body) => {
                body.color = color;
                true
            }
            None => false,
        }
    }

    pub fn clear_trails(&mut self) {
        self.bodies.iter_mut().for_each(Body::clear_trail);
    }

    /// Returns the number of bodies in the system
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Σ m·v; approximately zero right after barycenter alignment
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    /// Σ m·x; approximately zero right after barycenter alignment
    pub fn mass_moment(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(|b| b.position.coords * b.mass)
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    /// Returns the total angular momentum of all bodies
    ///
    /// This should be conserved in an isolated system
    pub fn total_angular_momentum(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| b.specific_angular_momentum() * b.mass)
            .sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }
}
