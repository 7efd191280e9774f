//! Plant model schema definitions.
//!
//! The wire document keys (`CV`/`MV`, `output`/`input`) belong to the
//! external engine's vocabulary and stay confined to this module; the rest
//! of the workspace sees [`ModelDefinition`].

use serde::{Deserialize, Serialize};

/// One controlled or manipulated variable with its display unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDef {
    pub name: String,
    pub unit: String,
}

/// A loaded plant model: ordered variable lists and the intrinsic
/// prediction-depth limit `N*`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDefinition {
    pub name: String,
    pub controlled: Vec<VariableDef>,
    pub manipulated: Vec<VariableDef>,
    pub horizon: u32,
}

impl ModelDefinition {
    pub fn n_cv(&self) -> usize {
        self.controlled.len()
    }

    pub fn n_mv(&self) -> usize {
        self.manipulated.len()
    }
}

/// Model document as stored, one JSON file per model name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDocument {
    #[serde(rename = "CV")]
    pub cv: Vec<CvDoc>,
    #[serde(rename = "MV")]
    pub mv: Vec<MvDoc>,
    pub horizon: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvDoc {
    pub output: String,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MvDoc {
    pub input: String,
    pub unit: String,
}

impl ModelDocument {
    /// Convert into the semantic form, checking the horizon bound.
    pub fn into_definition(self, name: &str) -> Result<ModelDefinition, crate::ModelError> {
        if self.horizon < 1 {
            return Err(crate::ModelError::InvalidModel {
                name: name.to_string(),
                reason: format!("horizon must be at least 1, got {}", self.horizon),
            });
        }

        Ok(ModelDefinition {
            name: name.to_string(),
            controlled: self
                .cv
                .into_iter()
                .map(|v| VariableDef {
                    name: v.output,
                    unit: v.unit,
                })
                .collect(),
            manipulated: self
                .mv
                .into_iter()
                .map(|v| VariableDef {
                    name: v.input,
                    unit: v.unit,
                })
                .collect(),
            horizon: self.horizon as u32,
        })
    }
}
