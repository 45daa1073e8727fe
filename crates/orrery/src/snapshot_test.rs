use nbody::trail::MAX_HISTORY;
use serde_json::json;

use crate::simulation::Simulation;
use crate::snapshot::TrailSnapshot;

#[test]
fn test_snapshot_uses_camel_case() {
    let sim = Simulation::solar_system();
    let value = serde_json::to_value(sim.snapshot()).unwrap();

    assert_eq!(value["timeScale"], json!(1.0));
    assert_eq!(value["stepCount"], json!(0));
    assert_eq!(value["running"], json!(true));
    assert!(value["totalEnergy"].is_number());

    let sun = &value["bodies"][0];
    assert_eq!(sun["name"], json!("Sun"));
    assert_eq!(sun["color"], json!("#FDB813"));
    assert_eq!(sun["baseMass"], json!(1.0));
    assert_eq!(sun["alive"], json!(true));
    assert_eq!(sun["trail"]["historyIndex"], json!(0));
}

#[test]
fn test_unwritten_trail_slots_are_null() {
    let sim = Simulation::solar_system();
    let value = serde_json::to_value(sim.snapshot()).unwrap();

    let history_x = value["bodies"][1]["trail"]["historyX"].as_array().unwrap();
    assert_eq!(history_x.len(), MAX_HISTORY);
    assert!(history_x.iter().all(|v| v.is_null()));
}

#[test]
fn test_trail_snapshot_mirrors_buffers() {
    let mut sim = Simulation::solar_system();
    sim.step(100);

    let mercury = sim.body(1).unwrap();
    let trail = TrailSnapshot::from(mercury.trail());

    assert_eq!(trail.history_index, mercury.trail().history_index());
    assert_eq!(trail.history_x.iter().flatten().count(), mercury.trail().len());
    let first = mercury.trail().get(0).unwrap();
    assert_eq!(trail.history_x[0], Some(first.x));
    assert_eq!(trail.history_y[0], Some(first.y));
}

#[test]
fn test_body_snapshot_matches_body() {
    let sim = Simulation::solar_system();
    let snapshot = sim.snapshot();

    for (body, snap) in sim.bodies().iter().zip(&snapshot.bodies) {
        assert_eq!(snap.id, body.id.0);
        assert_eq!(snap.position, [body.position.x, body.position.y]);
        assert_eq!(snap.velocity, [body.velocity.x, body.velocity.y]);
        assert_eq!(snap.mass, body.mass);
        assert_eq!(snap.radius, body.radius);
    }
}
