//! Serializable copies of the simulation state for renderers and hosts

use nbody::trail::Trail;
use nbody::Body;
use serde::Serialize;

/// Trail buffers as a renderer sees them
///
/// Unwritten slots serialize as `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailSnapshot {
    pub history_x: Vec<Option<f64>>,
    pub history_y: Vec<Option<f64>>,
    /// Slot the next sample will be written to
    pub history_index: usize,
}

impl From<&Trail> for TrailSnapshot {
    fn from(trail: &Trail) -> Self {
        let slots = |values: &[f64]| -> Vec<Option<f64>> {
            values.iter().map(|v| (!v.is_nan()).then_some(*v)).collect()
        };

        Self {
            history_x: slots(trail.xs()),
            history_y: slots(trail.ys()),
            history_index: trail.history_index(),
        }
    }
}

/// Body state snapshot
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySnapshot {
    pub id: u32,
    pub name: String,
    /// `#RRGGBB`
    pub color: String,
    /// Mass in solar masses
    pub mass: f64,
    pub base_mass: f64,
    pub radius: f64,
    pub alive: bool,
    /// Position [x, y] in AU
    pub position: [f64; 2],
    /// Velocity [x, y] in AU/year
    pub velocity: [f64; 2],
    pub trail: TrailSnapshot,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id.0,
            name: body.name.clone(),
            color: body.color.to_hex(),
            mass: body.mass,
            base_mass: body.base_mass,
            radius: body.radius,
            alive: body.alive,
            position: [body.position.x, body.position.y],
            velocity: [body.velocity.x, body.velocity.y],
            trail: body.trail().into(),
        }
    }
}

/// Complete simulation state snapshot
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSnapshot {
    /// Simulated years since setup or the last reset
    pub time: f64,
    pub time_scale: f64,
    pub running: bool,
    pub step_count: u64,
    pub bodies: Vec<BodySnapshot>,
    /// Total kinetic energy (M☉·AU²/yr²)
    pub kinetic_energy: f64,
    /// Softened pairwise potential energy
    pub potential_energy: f64,
    /// Total energy (should be conserved)
    pub total_energy: f64,
    /// Σ m·v
    pub momentum: [f64; 2],
}
