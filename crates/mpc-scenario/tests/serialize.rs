use mpc_scenario::schema::ScenarioDraft;
use mpc_scenario::serialize::{serialize_reference, serialize_scenario};
use mpc_scenario::{ScenarioError, load_draft, save_draft};
use serde_json::json;

fn single_well_draft() -> ScenarioDraft {
    let mut draft = ScenarioDraft::blank();
    draft.model_name = "SingleWell".to_string();
    draft.scenario_name = "test".to_string();
    draft.t = "180".to_string();
    draft.p = "100".to_string();
    draft.m = "50".to_string();
    draft.w = "0".to_string();
    draft.q = "[100]".to_string();
    draft.r = "[1]".to_string();
    draft.ro_h = "[1]".to_string();
    draft.ro_l = "[1]".to_string();
    draft.ldu = "[-10]".to_string();
    draft.udu = "[10]".to_string();
    draft.lu = "[0]".to_string();
    draft.uu = "[1000]".to_string();
    draft.ly = "[0]".to_string();
    draft.uy = "[4000]".to_string();
    draft.reference = vec!["50".to_string()];
    draft
}

#[test]
fn single_well_wire_document_shape() {
    let wire = serialize_scenario(&single_well_draft()).unwrap();

    let value = serde_json::to_value(&wire).unwrap();
    assert_eq!(
        value,
        json!({
            "system": "SingleWell",
            "MPC": {
                "P": 100,
                "M": 50,
                "W": 0,
                "Q": [100.0],
                "R": [1.0],
                "RoH": [1.0],
                "RoL": [1.0],
                "bias update": false
            },
            "c": [
                {"du[0]": [-10.0, 10.0]},
                {"u[0]": [0.0, 1000.0]},
                {"y[0]": [0.0, 4000.0]}
            ]
        })
    );
}

#[test]
fn constraint_list_round_trips_every_pair() {
    let mut draft = single_well_draft();
    // Two MVs, two CVs worth of bounds.
    draft.ldu = "[-2, -10]".to_string();
    draft.udu = "[2, 10]".to_string();
    draft.lu = "[0, 5]".to_string();
    draft.uu = "[100, 1000]".to_string();
    draft.ly = "[0, -50]".to_string();
    draft.uy = "[4000, 100]".to_string();

    let wire = serialize_scenario(&draft).unwrap();

    let expect = [
        ("du[0]", [-2.0, 2.0]),
        ("du[1]", [-10.0, 10.0]),
        ("u[0]", [0.0, 100.0]),
        ("u[1]", [5.0, 1000.0]),
        ("y[0]", [0.0, 4000.0]),
        ("y[1]", [-50.0, 100.0]),
    ];

    assert_eq!(wire.c.len(), expect.len());
    for (entry, (key, bounds)) in wire.c.iter().zip(expect) {
        assert_eq!(entry.len(), 1);
        assert_eq!(entry.get(key), Some(&bounds));
    }
}

#[test]
fn unequal_pair_lengths_are_a_dimension_mismatch() {
    let mut draft = single_well_draft();
    draft.uu = "[100, 1000]".to_string();

    let err = serialize_scenario(&draft).unwrap_err();
    match err {
        ScenarioError::DimensionMismatch {
            category,
            lower,
            upper,
        } => {
            assert_eq!(category, "u");
            assert_eq!(lower, 1);
            assert_eq!(upper, 2);
        }
        other => panic!("expected DimensionMismatch, got {:?}", other),
    }
}

#[test]
fn unparseable_field_is_a_typed_parse_error() {
    let mut draft = single_well_draft();
    draft.q = "[1, oops]".to_string();

    let err = serialize_scenario(&draft).unwrap_err();
    assert!(matches!(err, ScenarioError::Parse(_)));
}

#[test]
fn reference_document_shape() {
    let doc = serialize_reference(&["50".to_string(), "12.5".to_string()]).unwrap();
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value, json!({"ref": [50.0, 12.5]}));
}

#[test]
fn blank_reference_entry_fails_serialization() {
    assert!(serialize_reference(&["".to_string()]).is_err());
}

#[test]
fn draft_snapshot_round_trip() {
    let draft = single_well_draft();

    let path = std::env::temp_dir().join("mpc_scenario_snapshot_roundtrip.json");
    save_draft(&path, &draft).unwrap();
    let restored = load_draft(&path).unwrap();

    assert_eq!(draft, restored);
}
