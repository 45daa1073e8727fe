use nalgebra::{Point2, Vector2};

use crate::body::{Body, BodyId};
use crate::color::Color;
use crate::trail::MAX_HISTORY;

fn make_body(mass: f64, position: [f64; 2], velocity: [f64; 2]) -> Body {
    Body::new(
        BodyId(0),
        "Test",
        Color::WHITE,
        mass,
        0.01,
        Point2::new(position[0], position[1]),
        Vector2::new(velocity[0], velocity[1]),
    )
}

#[test]
fn test_new_body_defaults() {
    let body = make_body(2.0, [1.0, 0.0], [0.0, 6.28]);

    assert_eq!(body.mass, 2.0);
    assert_eq!(body.base_mass, 2.0);
    assert!(body.alive);
    assert_eq!(body.acceleration, Vector2::zeros());
    assert!(body.trail().is_empty());
    assert_eq!(body.trail().history_index(), 0);
    assert_eq!(body.trail().capacity(), MAX_HISTORY);
}

#[test]
fn test_mass_edit_keeps_base_mass() {
    let mut body = make_body(2.0, [1.0, 0.0], [0.0, 0.0]);
    body.mass = 5.0;

    assert_eq!(body.mass, 5.0);
    assert_eq!(body.base_mass, 2.0);
}

#[test]
fn test_momentum() {
    let body = make_body(2.0, [1.0, 0.0], [3.0, 4.0]);

    assert_eq!(body.momentum(), Vector2::new(6.0, 8.0));
}

#[test]
fn test_kinetic_energy() {
    let body = make_body(2.0, [0.0, 0.0], [3.0, 4.0]);

    // KE = 0.5 * m * v² = 0.5 * 2 * 25 = 25
    assert_eq!(body.kinetic_energy(), 25.0);
}

#[test]
fn test_distance_to() {
    let body_a = make_body(1.0, [0.0, 0.0], [0.0, 0.0]);
    let body_b = make_body(1.0, [3.0, 4.0], [0.0, 0.0]);

    assert_eq!(body_a.distance_to(&body_b), 5.0);
}

#[test]
fn test_speed() {
    let body = make_body(1.0, [0.0, 0.0], [3.0, 4.0]);

    assert_eq!(body.speed(), 5.0);
}

#[test]
fn test_specific_angular_momentum() {
    let body = make_body(1.0, [1.0, 0.0], [0.0, 2.0]);

    // L_z = x * v_y - y * v_x = 2.0
    assert_eq!(body.specific_angular_momentum(), 2.0);
}

#[test]
fn test_record_and_clear_trail() {
    // Fast enough that every 10th step is sampled
    let mut body = make_body(1.0, [1.0, 2.0], [10.0, 0.0]);

    for _ in 0..10 {
        body.record_trail();
    }
    assert_eq!(body.trail().len(), 1);
    assert_eq!(body.trail().get(0), Some(Point2::new(1.0, 2.0)));

    body.clear_trail();
    assert!(body.trail().is_empty());
    assert_eq!(body.trail().history_index(), 0);
}
