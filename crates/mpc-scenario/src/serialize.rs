//! Wire-format serialization for admissible drafts.
//!
//! The caller is expected to have passed the admissibility gate first; this
//! module does not re-validate. It still refuses to emit a constraint pair
//! of unequal lengths, since that would hand the engine a document it
//! cannot interpret.

use crate::numvec::{NumVecError, parse_integer, parse_vector};
use crate::schema::ScenarioDraft;
use crate::{ScenarioError, ScenarioResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One bound record, `{"<cat>[<i>]": [lower, upper]}`.
pub type ConstraintEntry = BTreeMap<String, [f64; 2]>;

/// The scenario document the engine consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireScenario {
    pub system: String,
    #[serde(rename = "MPC")]
    pub mpc: MpcSection,
    pub c: Vec<ConstraintEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MpcSection {
    #[serde(rename = "P")]
    pub p: i64,
    #[serde(rename = "M")]
    pub m: i64,
    #[serde(rename = "W")]
    pub w: i64,
    #[serde(rename = "Q")]
    pub q: Vec<f64>,
    #[serde(rename = "R")]
    pub r: Vec<f64>,
    #[serde(rename = "RoH")]
    pub ro_h: Vec<f64>,
    #[serde(rename = "RoL")]
    pub ro_l: Vec<f64>,
    #[serde(rename = "bias update")]
    pub bias_update: bool,
}

/// The reference document, transmitted separately from the scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDocument {
    #[serde(rename = "ref")]
    pub reference: Vec<f64>,
}

/// Serialize a draft into the canonical scenario document.
pub fn serialize_scenario(draft: &ScenarioDraft) -> ScenarioResult<WireScenario> {
    let ldu = parse_vector(&draft.ldu)?;
    let udu = parse_vector(&draft.udu)?;
    let lu = parse_vector(&draft.lu)?;
    let uu = parse_vector(&draft.uu)?;
    let ly = parse_vector(&draft.ly)?;
    let uy = parse_vector(&draft.uy)?;

    let mut c = process_constraints(&ldu, &udu, "du")?;
    c.extend(process_constraints(&lu, &uu, "u")?);
    c.extend(process_constraints(&ly, &uy, "y")?);

    Ok(WireScenario {
        system: draft.model_name.clone(),
        mpc: MpcSection {
            p: parse_integer(&draft.p)?,
            m: parse_integer(&draft.m)?,
            w: parse_integer(&draft.w)?,
            q: parse_vector(&draft.q)?,
            r: parse_vector(&draft.r)?,
            ro_h: parse_vector(&draft.ro_h)?,
            ro_l: parse_vector(&draft.ro_l)?,
            bias_update: false,
        },
        c,
    })
}

/// Serialize the reference vector into its own document.
pub fn serialize_reference(reference: &[String]) -> ScenarioResult<ReferenceDocument> {
    let parsed = reference
        .iter()
        .map(|entry| {
            let entry = entry.trim();
            entry.parse::<f64>().map_err(|_| NumVecError::BadToken {
                token: entry.to_string(),
            })
        })
        .collect::<Result<Vec<f64>, NumVecError>>()?;

    Ok(ReferenceDocument { reference: parsed })
}

/// Flatten a lower/upper pair into indexed single-key records.
fn process_constraints(
    lower: &[f64],
    upper: &[f64],
    category: &'static str,
) -> ScenarioResult<Vec<ConstraintEntry>> {
    if lower.len() != upper.len() {
        return Err(ScenarioError::DimensionMismatch {
            category,
            lower: lower.len(),
            upper: upper.len(),
        });
    }

    Ok(lower
        .iter()
        .zip(upper)
        .enumerate()
        .map(|(i, (lo, hi))| {
            let mut entry = ConstraintEntry::new();
            entry.insert(format!("{}[{}]", category, i), [*lo, *hi]);
            entry
        })
        .collect())
}
