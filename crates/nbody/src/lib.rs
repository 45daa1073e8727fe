//! Planar N-body core for a small star-and-planets system.
//!
//! Units throughout: AU, years, solar masses, with G = 4π².

pub mod barycenter;
pub mod body;
pub mod color;
pub mod forces;
pub mod integrator;
pub mod kepler;
pub mod state;
pub mod trail;

pub use body::{Body, BodyId};
pub use color::{Color, ColorError};

#[cfg(test)]
mod body_test;
#[cfg(test)]
mod trail_test;
