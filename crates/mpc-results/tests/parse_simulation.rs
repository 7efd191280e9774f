use mpc_results::{ResultsError, parse_simulation};
use serde_json::json;

fn single_well_result(t: i64, p: i64, m: i64) -> String {
    let y_len = (t + p) as usize;
    let u_len = (t + m) as usize;

    json!({
        "scenario": "test",
        "T": t,
        "n_CV": 1,
        "n_MV": 1,
        "P": p,
        "M": m,
        "CV": [{
            "output": "oil rate",
            "unit": "m3/hr",
            "c": [0.0, 4000.0],
            "y_pred": vec![50.0; y_len],
            "ref": vec![50.0; y_len]
        }],
        "MV": [{
            "input": "gas lift rate",
            "unit": "m3/hr",
            "c": [0.0, 1000.0],
            "u": vec![500.0; u_len]
        }]
    })
    .to_string()
}

#[test]
fn well_formed_result_parses() {
    let result = parse_simulation(&single_well_result(180, 100, 50)).unwrap();

    assert_eq!(result.scenario, "test");
    assert_eq!(result.t, 180);
    assert_eq!(result.n_cv, 1);
    assert_eq!(result.n_mv, 1);
    assert_eq!(result.cvs.len(), 1);
    assert_eq!(result.mvs.len(), 1);

    let cv = &result.cvs[0];
    assert_eq!(cv.name, "oil rate");
    assert_eq!(cv.bounds, [0.0, 4000.0]);

    let mv = &result.mvs[0];
    assert_eq!(mv.name, "gas lift rate");
    assert_eq!(mv.bounds, [0.0, 1000.0]);
}

#[test]
fn series_lengths_match_declared_horizons() {
    let result = parse_simulation(&single_well_result(180, 100, 50)).unwrap();

    let expected_y = (result.t + result.p) as usize;
    let expected_u = (result.t + result.m) as usize;

    for cv in &result.cvs {
        assert_eq!(cv.predicted.len(), expected_y);
        assert_eq!(cv.reference.len(), expected_y);
    }
    for mv in &result.mvs {
        assert_eq!(mv.actuation.len(), expected_u);
    }
}

#[test]
fn source_ordering_is_preserved() {
    let doc = json!({
        "scenario": "two-cv",
        "T": 10,
        "n_CV": 2,
        "n_MV": 0,
        "P": 5,
        "M": 3,
        "CV": [
            {"output": "first", "unit": "a", "c": [0.0, 1.0], "y_pred": [], "ref": []},
            {"output": "second", "unit": "b", "c": [0.0, 1.0], "y_pred": [], "ref": []}
        ],
        "MV": []
    })
    .to_string();

    let result = parse_simulation(&doc).unwrap();
    assert_eq!(result.cvs[0].name, "first");
    assert_eq!(result.cvs[1].name, "second");
}

#[test]
fn missing_key_is_malformed() {
    let doc = json!({
        "scenario": "broken",
        "T": 10,
        "n_CV": 0,
        "n_MV": 0,
        "P": 5
        // no M, no CV, no MV
    })
    .to_string();

    let err = parse_simulation(&doc).unwrap_err();
    let ResultsError::Malformed { detail } = err;
    assert!(detail.contains("M") || detail.contains("missing"));
}

#[test]
fn wrong_shape_inside_a_variable_is_malformed() {
    let doc = json!({
        "scenario": "broken",
        "T": 10,
        "n_CV": 1,
        "n_MV": 0,
        "P": 5,
        "M": 3,
        "CV": [{"output": "x", "unit": "a", "c": [0.0], "y_pred": [], "ref": []}],
        "MV": []
    })
    .to_string();

    assert!(parse_simulation(&doc).is_err());
}

#[test]
fn not_json_at_all_is_malformed() {
    assert!(matches!(
        parse_simulation("SIM ERROR"),
        Err(ResultsError::Malformed { .. })
    ));
}
