//! The external engine call boundary.

/// A rejection from the engine. The message is implementation-defined and
/// is surfaced to the user verbatim.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct EngineError {
    pub message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The MPC/QP engine as an opaque collaborator.
///
/// `solve` is the pipeline's one suspension point. The two documents passed
/// in and the one passed back are the only state crossing this boundary;
/// there is no cancellation, and a rejection leaves the caller free to
/// retry with the draft untouched.
pub trait Engine {
    fn solve(
        &self,
        scenario_json: &str,
        model_json: &str,
        scenario_name: &str,
        reference_json: &str,
        t: i64,
    ) -> Result<String, EngineError>;
}
