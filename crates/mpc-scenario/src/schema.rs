//! Scenario draft schema.

use serde::{Deserialize, Serialize};

/// The configuration being edited, every field exactly as typed.
///
/// Vector fields use the bracketed comma convention (`"[1, 100]"`); horizon
/// fields hold integer text. Nothing here is guaranteed consistent with the
/// selected model: the validator decides that, field by field, and a draft
/// is allowed to stay inconsistent for as long as the user keeps editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDraft {
    /// Catalog key of the selected model, `""` while unselected.
    pub model_name: String,
    pub scenario_name: String,

    /// Simulation length T.
    pub t: String,
    /// Prediction horizon P.
    pub p: String,
    /// Control horizon M.
    pub m: String,
    /// Time-delay horizon W.
    pub w: String,

    /// Output weights, one per CV.
    pub q: String,
    /// Actuation weights, one per MV.
    pub r: String,
    /// Upper slack weights, one per CV; leave both slack fields empty to
    /// disable slack altogether.
    pub ro_h: String,
    /// Lower slack weights, one per CV.
    pub ro_l: String,

    /// Rate-of-change bounds, one per MV.
    pub ldu: String,
    pub udu: String,
    /// Actuation bounds, one per MV.
    pub lu: String,
    pub uu: String,
    /// Output bounds, one per CV.
    pub ly: String,
    pub uy: String,

    /// One target per CV; the literal `"0"` means not yet provided.
    #[serde(default)]
    pub reference: Vec<String>,
}

impl ScenarioDraft {
    /// Empty draft, nothing selected, every vector field an empty list.
    pub fn blank() -> Self {
        Self {
            model_name: String::new(),
            scenario_name: String::new(),
            t: "0".to_string(),
            p: "0".to_string(),
            m: "0".to_string(),
            w: "0".to_string(),
            q: "[]".to_string(),
            r: "[]".to_string(),
            ro_h: "[]".to_string(),
            ro_l: "[]".to_string(),
            ldu: "[]".to_string(),
            udu: "[]".to_string(),
            lu: "[]".to_string(),
            uu: "[]".to_string(),
            ly: "[]".to_string(),
            uy: "[]".to_string(),
            reference: Vec::new(),
        }
    }

    /// Reset the reference vector to `n_cv` unset sentinels.
    pub fn reset_reference(&mut self, n_cv: usize) {
        self.reference = vec!["0".to_string(); n_cv];
    }
}

impl Default for ScenarioDraft {
    fn default() -> Self {
        Self::blank()
    }
}
