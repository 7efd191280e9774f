//! mpc-scenario: scenario draft format, validation, and wire serialization.

pub mod defaults;
pub mod numvec;
pub mod schema;
pub mod serialize;
pub mod validate;

pub use defaults::DefaultsTable;
pub use numvec::{NumVecError, parse_integer, parse_vector};
pub use schema::ScenarioDraft;
pub use serialize::{
    ConstraintEntry, MpcSection, ReferenceDocument, WireScenario, serialize_reference,
    serialize_scenario,
};
pub use validate::{ErrorMap, admissible, reference_provided, validate};

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    #[error("Parse error: {0}")]
    Parse(#[from] NumVecError),

    #[error("Constraint pair '{category}' has {lower} lower and {upper} upper bounds")]
    DimensionMismatch {
        category: &'static str,
        lower: usize,
        upper: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Restore a draft snapshot. Drafts are partially valid by design, so no
/// validation happens on load.
pub fn load_draft(path: &std::path::Path) -> ScenarioResult<ScenarioDraft> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Snapshot a draft to disk.
pub fn save_draft(path: &std::path::Path, draft: &ScenarioDraft) -> ScenarioResult<()> {
    let content = serde_json::to_string_pretty(draft)?;
    std::fs::write(path, content)?;
    Ok(())
}
