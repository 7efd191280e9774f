//! Result document parsing.
//!
//! The engine's wire vocabulary (`n_CV`, `y_pred`, `u`, `c`, ...) is known
//! only here; everything downstream works with the semantic names in
//! [`crate::types`]. This is a reshape/rename step, no numeric work.

use crate::types::{CvSeries, MvSeries, SimulationResult};
use crate::{ResultsError, ResultsResult};
use serde::Deserialize;

#[derive(Deserialize)]
struct ResultDoc {
    scenario: String,
    #[serde(rename = "T")]
    t: i64,
    #[serde(rename = "n_CV")]
    n_cv: usize,
    #[serde(rename = "n_MV")]
    n_mv: usize,
    #[serde(rename = "P")]
    p: i64,
    #[serde(rename = "M")]
    m: i64,
    #[serde(rename = "CV")]
    cv: Vec<CvDoc>,
    #[serde(rename = "MV")]
    mv: Vec<MvDoc>,
}

#[derive(Deserialize)]
struct CvDoc {
    output: String,
    unit: String,
    c: [f64; 2],
    y_pred: Vec<f64>,
    #[serde(rename = "ref")]
    reference: Vec<f64>,
}

#[derive(Deserialize)]
struct MvDoc {
    input: String,
    unit: String,
    c: [f64; 2],
    u: Vec<f64>,
}

/// Parse an engine result document into per-variable series.
pub fn parse_simulation(json: &str) -> ResultsResult<SimulationResult> {
    let doc: ResultDoc = serde_json::from_str(json).map_err(|e| ResultsError::Malformed {
        detail: e.to_string(),
    })?;

    Ok(SimulationResult {
        scenario: doc.scenario,
        t: doc.t,
        n_cv: doc.n_cv,
        n_mv: doc.n_mv,
        p: doc.p,
        m: doc.m,
        cvs: doc
            .cv
            .into_iter()
            .map(|cv| CvSeries {
                name: cv.output,
                unit: cv.unit,
                bounds: cv.c,
                predicted: cv.y_pred,
                reference: cv.reference,
            })
            .collect(),
        mvs: doc
            .mv
            .into_iter()
            .map(|mv| MvSeries {
                name: mv.input,
                unit: mv.unit,
                bounds: mv.c,
                actuation: mv.u,
            })
            .collect(),
    })
}
