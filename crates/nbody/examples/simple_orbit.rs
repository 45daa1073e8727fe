//! Single planet on a Kepler-initialized orbit
//!
//! Demonstrates velocity Verlet on a star + eccentric planet pair set up
//! from orbital elements, checking energy and angular momentum once per
//! orbit.
//!
//! Run with: cargo run --package nbody --example simple_orbit

use nalgebra::{Point2, Vector2};
use nbody::barycenter::align_to_barycenter;
use nbody::forces::{compute_accelerations, DirectGravity, ForceModel, G};
use nbody::integrator::{Integrator, VelocityVerlet};
use nbody::kepler::OrbitalElements;
use nbody::state::SystemState;
use nbody::Color;

fn main() {
    println!("Velocity Verlet: single eccentric orbit\n");
    println!("{}", "=".repeat(60));

    let star_mass = 1.0;
    let planet_mass = 3.0e-6;
    let orbit = OrbitalElements::new(1.0, 0.2, 30.0, 30.0);
    let state = orbit.state_vector(star_mass, planet_mass);

    let mut system = SystemState::new();
    system.add_body(
        "Star",
        Color::new(255, 210, 127),
        star_mass,
        20.0,
        Point2::origin(),
        Vector2::zeros(),
    );
    system.add_body(
        "Planet",
        Color::new(46, 134, 255),
        planet_mass,
        5.0,
        state.position,
        state.velocity,
    );

    align_to_barycenter(&mut system.bodies);

    let force = DirectGravity::new();
    compute_accelerations(&force, &mut system.bodies);

    println!("\nInitial conditions:");
    println!("  a = {:.3} AU, e = {:.3}", orbit.semi_major_axis, orbit.eccentricity);
    println!(
        "  Planet at ({:.4}, {:.4}) AU moving {:.4} AU/yr",
        state.position.x,
        state.position.y,
        state.velocity.magnitude()
    );

    let initial_energy = system.kinetic_energy() + force.potential_energy(&system.bodies);
    let initial_l = system.total_angular_momentum();

    let period = orbit.period(G * (star_mass + planet_mass));
    let steps_per_orbit = 2000;
    let dt = period / steps_per_orbit as f64;
    let n_orbits = 10;

    println!("\nIntegration parameters:");
    println!("  Timestep: {:.6} years ({} steps/orbit)", dt, steps_per_orbit);
    println!("  Total time: {} orbits ({:.3} years)", n_orbits, n_orbits as f64 * period);

    for orbit_count in 1..=n_orbits {
        VelocityVerlet.integrate(&mut system, dt, steps_per_orbit, &force);

        let separation = system.bodies[1].distance_to(&system.bodies[0]);
        let energy = system.kinetic_energy() + force.potential_energy(&system.bodies);
        let l = system.total_angular_momentum();

        println!(
            "Orbit {}: r={:.6} AU, ΔE={:.2e}, ΔL={:.2e}, trail points={}",
            orbit_count,
            separation,
            ((energy - initial_energy) / initial_energy).abs(),
            ((l - initial_l) / initial_l).abs(),
            system.bodies[1].trail().len()
        );
    }

    let final_energy = system.kinetic_energy() + force.potential_energy(&system.bodies);
    let energy_error = ((final_energy - initial_energy) / initial_energy).abs();

    println!("\n{}", "=".repeat(60));
    if energy_error < 1e-4 {
        println!("✓ Energy conserved to within 0.01%");
    } else {
        println!("✗ Energy error too large: {:.2e}", energy_error);
    }
}
