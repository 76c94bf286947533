use hf_core::units::{MassUnit, PressureUnit};
use hf_flow::Propellant;
use hf_roles::Role;
use hf_session::config::{load_json, load_yaml, save_json, save_yaml};
use hf_session::{SessionConfig, VenturiDef};

fn sample() -> SessionConfig {
    let mut config = SessionConfig::default();
    config.units.pressure = PressureUnit::Bar;
    config.units.mass = MassUnit::Kg;
    config.oxidizer = Some(VenturiDef {
        fluid: Some("n2o".to_string()),
        density_kg_m3: None,
        ..VenturiDef::new(0.0, 0.02, 0.008)
    });
    config.fuel = Some(VenturiDef::new(820.0, 0.015, 0.006).with_cd(0.97));
    config.weighed_propellant = Some(Propellant::Fuel);
    config.smoothing_window = Some(5);
    config.keywords.set_fragments(Role::Thrust, &["thrust", "lbf"]);
    config
}

#[test]
fn yaml_round_trip() {
    let config = sample();
    let path = std::env::temp_dir().join("hf_session_roundtrip.yaml");
    save_yaml(&path, &config).unwrap();
    assert_eq!(load_yaml(&path).unwrap(), config);
}

#[test]
fn json_round_trip() {
    let config = sample();
    let path = std::env::temp_dir().join("hf_session_roundtrip.json");
    save_json(&path, &config).unwrap();
    assert_eq!(load_json(&path).unwrap(), config);
}

#[test]
fn partial_yaml_fills_defaults() {
    let yaml = r#"
units:
  pressure: kpa
fuel:
  fluid: RP-1
  upstream_diameter_m: 0.02
  throat_diameter_m: 0.01
  upstream_role: pressure
"#;
    let config = SessionConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.units.pressure, PressureUnit::Kpa);
    assert_eq!(config.units.mass, MassUnit::Lb);
    assert_eq!(config.weighed_propellant, Some(Propellant::Oxidizer));

    let fuel = config.fuel.as_ref().unwrap();
    assert_eq!(fuel.expansion_factor, 1.0);
    assert_eq!(fuel.density_kg_m3().unwrap(), 820.0);
    assert_eq!(
        fuel.taps(Propellant::Fuel),
        (Role::Pressure, Role::FeedPressureD)
    );
}

#[test]
fn unknown_fluid_is_rejected() {
    let yaml = "oxidizer:\n  fluid: unobtainium\n  upstream_diameter_m: 0.02\n  throat_diameter_m: 0.01\n";
    assert!(SessionConfig::from_yaml_str(yaml).is_err());
}
