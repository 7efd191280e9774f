//! Parsed simulation result types.

use serde::{Deserialize, Serialize};

/// A complete parsed simulation: run metadata plus per-variable series.
///
/// Ordering is preserved from the result document, so index `i` in `cvs`
/// corresponds to index `i` of the model's controlled variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub scenario: String,
    pub t: i64,
    pub n_cv: usize,
    pub n_mv: usize,
    pub p: i64,
    pub m: i64,
    pub cvs: Vec<CvSeries>,
    pub mvs: Vec<MvSeries>,
}

/// Predicted output and reference trajectory for one controlled variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvSeries {
    pub name: String,
    pub unit: String,
    pub bounds: [f64; 2],
    pub predicted: Vec<f64>,
    pub reference: Vec<f64>,
}

/// Actuation trajectory for one manipulated variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MvSeries {
    pub name: String,
    pub unit: String,
    pub bounds: [f64; 2],
    pub actuation: Vec<f64>,
}
