use crate::config::SimulationConfig;
use crate::error::OrreryError;

const SCENARIO_YAML: &str = r##"
time_scale: 5.0
bodies:
  - name: Sun
    color: "#FFD27F"
    base_mass: 1.0
    radius_draw: 20.0
  - name: Earth
    color: "#2E86FF"
    base_mass: 3.003e-6
    radius_draw: 5.0
    orbit:
      semi_major_axis: 1.00000261
      eccentricity: 0.01671123
      longitude_of_perihelion: 102.93768193
      mean_longitude: 100.46457166
"##;

const SCENARIO_TOML: &str = r##"
running = false

[[bodies]]
name = "Star"
color = "#FFFFFF"
base_mass = 0.5
radius_draw = 15.0

[[bodies]]
name = "Planet"
color = "#00FF00"
base_mass = 1.0e-5
radius_draw = 4.0
orbit = { semi_major_axis = 2.0, eccentricity = 0.1, longitude_of_perihelion = 0.0, mean_longitude = 90.0 }
"##;

#[test]
fn test_yaml_scenario() {
    let config = SimulationConfig::from_yaml_str(SCENARIO_YAML).unwrap();

    assert_eq!(config.time_scale, 5.0);
    assert!(config.running);
    assert_eq!(config.bodies.len(), 2);
    assert!(config.bodies[0].orbit.is_none());
    assert_eq!(config.bodies[1].color.to_hex(), "#2E86FF");

    let orbit = config.bodies[1].orbit.unwrap();
    assert_eq!(orbit.semi_major_axis, 1.00000261);
    assert_eq!(orbit.mean_longitude, 100.46457166);
}

#[test]
fn test_toml_scenario() {
    let config = SimulationConfig::from_toml_str(SCENARIO_TOML).unwrap();

    assert_eq!(config.time_scale, 1.0);
    assert!(!config.running);
    assert_eq!(config.bodies[0].name, "Star");
    assert_eq!(config.bodies[1].orbit.unwrap().eccentricity, 0.1);
    assert_eq!(config.templates().unwrap().primary().name, "Star");
}

#[test]
fn test_bad_color_is_a_parse_error() {
    let yaml = SCENARIO_YAML.replace("#2E86FF", "#2E86");
    let err = SimulationConfig::from_yaml_str(&yaml).unwrap_err();

    assert!(matches!(err, OrreryError::Yaml(_)));
}

#[test]
fn test_scenario_without_primary() {
    let yaml = r##"
bodies:
  - name: Lost
    color: "#FFFFFF"
    base_mass: 1.0e-6
    radius_draw: 2.0
    orbit: { semi_major_axis: 1.0, eccentricity: 0.0, longitude_of_perihelion: 0.0, mean_longitude: 0.0 }
"##;
    let config = SimulationConfig::from_yaml_str(yaml).unwrap();

    assert!(matches!(config.templates(), Err(OrreryError::MissingPrimary)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SimulationConfig::load("does/not/exist.yaml").unwrap_err();
    assert!(matches!(err, OrreryError::Io(_)));
}

#[test]
fn test_default_is_solar_system() {
    let config = SimulationConfig::default();

    assert_eq!(config.bodies.len(), 9);
    assert_eq!(config.time_scale, 1.0);
    assert!(config.running);
}

#[test]
fn test_yaml_roundtrip_preserves_templates() {
    let config = SimulationConfig::default();
    let yaml = serde_yaml::to_string(&config).unwrap();

    assert_eq!(SimulationConfig::from_yaml_str(&yaml).unwrap(), config);
}
