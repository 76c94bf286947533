//! Classifier behaviour against realistic test-stand headers.

use std::collections::BTreeSet;

use hf_data::Dataset;
use hf_roles::{KeywordRule, KeywordTable, Role, classify, classify_dataset};
use proptest::prelude::*;

#[test]
fn hotfire_headers_map_to_expected_roles() {
    let headers = ["Time_s", "Chamber_PSI", "LoadCell_N", "Scale_kg"];
    let mapping = classify(&headers, &KeywordTable::default());

    assert_eq!(mapping.get(Role::Time), Some("Time_s"));
    assert_eq!(mapping.get(Role::Pressure), Some("Chamber_PSI"));
    assert_eq!(mapping.get(Role::Thrust), Some("LoadCell_N"));
    assert_eq!(mapping.get(Role::Weight), Some("Scale_kg"));
    assert_eq!(mapping.len(), 4);
}

#[test]
fn venturi_taps_are_picked_before_generic_pressure() {
    let headers = ["Time_s", "OX_P1_psi", "OX_P2_psi", "Chamber_PSI"];
    let mapping = classify(&headers, &KeywordTable::default());

    assert_eq!(mapping.get(Role::FeedPressureA), Some("OX_P1_psi"));
    assert_eq!(mapping.get(Role::FeedPressureB), Some("OX_P2_psi"));
    assert_eq!(mapping.get(Role::Pressure), Some("Chamber_PSI"));
}

#[test]
fn header_matching_two_roles_goes_to_higher_priority() {
    // "pressure_load" matches both the pressure and weight fragments.
    let table = KeywordTable::new(vec![
        KeywordRule::new(Role::Time, &["time"]),
        KeywordRule::new(Role::Pressure, &["press"]),
        KeywordRule::new(Role::Thrust, &["thrust"]),
        KeywordRule::new(Role::Weight, &["load"]),
    ]);
    let mapping = classify(&["pressure_load"], &table);
    assert_eq!(mapping.get(Role::Pressure), Some("pressure_load"));
    assert_eq!(mapping.get(Role::Weight), None);

    let reordered = KeywordTable::new(vec![
        KeywordRule::new(Role::Weight, &["load"]),
        KeywordRule::new(Role::Pressure, &["press"]),
    ]);
    let mapping = classify(&["pressure_load"], &reordered);
    assert_eq!(mapping.get(Role::Weight), Some("pressure_load"));
    assert_eq!(mapping.get(Role::Pressure), None);
}

#[test]
fn classify_dataset_uses_dataset_headers() {
    let ds = Dataset::from_dense_columns([
        ("time", vec![0.0, 0.1]),
        ("thrust_lbf", vec![0.0, 120.0]),
    ])
    .unwrap();
    let mapping = classify_dataset(&ds, &KeywordTable::default());
    assert_eq!(mapping.get(Role::Time), Some("time"));
    assert_eq!(mapping.get(Role::Thrust), Some("thrust_lbf"));
}

#[test]
fn keyword_table_overrides_from_yaml() {
    let yaml = r#"
rules:
  - role: time
    fragments: [elapsed]
  - role: thrust
    fragments: [lc1]
match_score: 7
"#;
    let table: KeywordTable = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(table.match_score, 7);

    let mapping = classify(&["Elapsed", "LC1 raw", "Time_s"], &table);
    assert_eq!(mapping.get(Role::Time), Some("Elapsed"));
    assert_eq!(mapping.get(Role::Thrust), Some("LC1 raw"));
    assert_eq!(mapping.role_of("Time_s"), None);
}

fn header_strategy() -> impl Strategy<Value = Vec<String>> {
    let fragment = prop::sample::select(vec![
        "time", "Time_s", "psi", "PT", "bar", "thrust", "N", "lbf", "load", "kg", "ox_p1",
        "fuel_p2", "misc", "valve", "TC",
    ]);
    prop::collection::vec((fragment, 0_u8..4), 0..12)
        .prop_map(|parts| parts.into_iter().map(|(f, n)| format!("{f}_{n}")).collect())
}

proptest! {
    #[test]
    fn classification_is_deterministic(headers in header_strategy()) {
        let table = KeywordTable::default();
        let first = classify(&headers, &table);
        let second = classify(&headers, &table);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn no_header_is_assigned_twice(headers in header_strategy()) {
        let mapping = classify(&headers, &KeywordTable::default());
        let mut seen = BTreeSet::new();
        for (_, header) in mapping.iter() {
            prop_assert!(seen.insert(header.to_string()), "header {} claimed twice", header);
            prop_assert!(headers.iter().any(|h| h == header));
        }
    }
}
