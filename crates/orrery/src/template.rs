//! Body templates: the static description a simulation is built from
//!
//! A template set holds exactly one primary (the template without an
//! orbit, placed at the origin at rest) and any number of bodies orbiting
//! it, each described by mean orbital elements.

use nalgebra::{Point2, Vector2};
use nbody::kepler::OrbitalElements;
use nbody::state::SystemState;
use nbody::Color;
use serde::{Deserialize, Serialize};

use crate::error::{OrreryError, Result};

/// One body of the initial configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyTemplate {
    pub name: String,
    pub color: Color,
    /// Solar masses
    pub base_mass: f64,
    /// Draw radius (pixels in the reference renderer)
    pub radius_draw: f64,
    /// Elements relative to the primary; `None` marks the primary itself
    #[serde(default)]
    pub orbit: Option<OrbitalElements>,
}

impl BodyTemplate {
    /// A template with no orbit
    pub fn primary(
        name: impl Into<String>,
        color: Color,
        base_mass: f64,
        radius_draw: f64,
    ) -> Self {
        Self {
            name: name.into(),
            color,
            base_mass,
            radius_draw,
            orbit: None,
        }
    }

    pub fn orbiting(
        name: impl Into<String>,
        color: Color,
        base_mass: f64,
        radius_draw: f64,
        orbit: OrbitalElements,
    ) -> Self {
        Self {
            name: name.into(),
            color,
            base_mass,
            radius_draw,
            orbit: Some(orbit),
        }
    }
}

/// Validated template list with its primary identified
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSet {
    templates: Vec<BodyTemplate>,
    primary: usize,
}

impl TemplateSet {
    /// Validates that exactly one template has no orbit
    ///
    /// # Errors
    ///
    /// [`OrreryError::MissingPrimary`] when every template has an orbit (or
    /// the list is empty), [`OrreryError::MultiplePrimaries`] when more than
    /// one has none.
    pub fn new(templates: Vec<BodyTemplate>) -> Result<Self> {
        let primaries: Vec<usize> = templates
            .iter()
            .enumerate()
            .filter(|(_, t)| t.orbit.is_none())
            .map(|(i, _)| i)
            .collect();

        match primaries.as_slice() {
            [] => Err(OrreryError::MissingPrimary),
            [primary] => Ok(Self {
                primary: *primary,
                templates,
            }),
            many => Err(OrreryError::MultiplePrimaries(
                many.iter().map(|&i| templates[i].name.clone()).collect(),
            )),
        }
    }

    /// The Sun and the eight planets with J2000 mean elements
    pub fn solar_system() -> Self {
        let planet = |name: &str, hex: [u8; 3], mass: f64, radius: f64, elements: [f64; 4]| {
            BodyTemplate::orbiting(
                name,
                Color::new(hex[0], hex[1], hex[2]),
                mass,
                radius,
                OrbitalElements::new(elements[0], elements[1], elements[2], elements[3]),
            )
        };

        let templates = vec![
            BodyTemplate::primary("Sun", Color::new(0xFD, 0xB8, 0x13), 1.0, 20.0),
            planet(
                "Mercury",
                [0xB1, 0xAD, 0xAD],
                1.660e-7,
                3.0,
                [0.38709927, 0.20563593, 77.45779628, 252.25032350],
            ),
            planet(
                "Venus",
                [0xE3, 0xBB, 0x76],
                2.447e-6,
                5.0,
                [0.72333566, 0.00677672, 131.60246718, 181.97909950],
            ),
            planet(
                "Earth",
                [0x2E, 0x86, 0xFF],
                3.003e-6,
                5.0,
                [1.00000261, 0.01671123, 102.93768193, 100.46457166],
            ),
            planet(
                "Mars",
                [0xC1, 0x44, 0x0E],
                3.227e-7,
                4.0,
                [1.52371034, 0.09339410, -23.94362959, -4.55343205],
            ),
            planet(
                "Jupiter",
                [0xD8, 0xCA, 0x9D],
                9.545e-4,
                12.0,
                [5.20288700, 0.04838624, 14.72847983, 34.39644051],
            ),
            planet(
                "Saturn",
                [0xE3, 0xE0, 0xC0],
                2.858e-4,
                10.0,
                [9.53667594, 0.05386179, 92.59887831, 49.95424423],
            ),
            planet(
                "Uranus",
                [0x9F, 0xD9, 0xE6],
                4.366e-5,
                8.0,
                [19.18916464, 0.04725744, 170.95427630, 313.23810451],
            ),
            planet(
                "Neptune",
                [0x4B, 0x70, 0xDD],
                5.151e-5,
                8.0,
                [30.06992276, 0.00859048, 44.96476227, -55.12002969],
            ),
        ];

        Self {
            templates,
            primary: 0,
        }
    }

    pub fn templates(&self) -> &[BodyTemplate] {
        &self.templates
    }

    pub fn primary(&self) -> &BodyTemplate {
        &self.templates[self.primary]
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Creates one body per template, in template order
    ///
    /// Orbiting bodies get their state from their elements around the
    /// primary's base mass. The result is in the primary-centered frame;
    /// alignment and forces are the caller's job.
    pub fn instantiate(&self) -> SystemState {
        let central_mass = self.primary().base_mass;
        let mut state = SystemState::new();

        for template in &self.templates {
            let (position, velocity) = match &template.orbit {
                Some(orbit) => {
                    let s = orbit.state_vector(central_mass, template.base_mass);
                    (s.position, s.velocity)
                }
                None => (Point2::origin(), Vector2::zeros()),
            };

            state.add_body(
                template.name.clone(),
                template.color,
                template.base_mass,
                template.radius_draw,
                position,
                velocity,
            );
        }

        state
    }
}

impl TryFrom<Vec<BodyTemplate>> for TemplateSet {
    type Error = OrreryError;

    fn try_from(templates: Vec<BodyTemplate>) -> Result<Self> {
        Self::new(templates)
    }
}
