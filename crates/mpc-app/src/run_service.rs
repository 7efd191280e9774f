//! Scenario submission: gate, serialize, solve, parse.

use mpc_model::ModelStore;
use mpc_results::SimulationResult;
use mpc_scenario::{parse_integer, serialize_reference, serialize_scenario};

use crate::engine::Engine;
use crate::error::{AppError, AppResult};
use crate::session::ScenarioSession;

/// Outcome of one engine invocation.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub scenario_name: String,
    pub timestamp: String,
    pub result: SimulationResult,
}

/// Submit the session's draft to the engine and parse the outcome.
///
/// The draft itself is never touched, so after a rejection the caller can
/// edit and resubmit.
pub fn run_scenario(
    session: &ScenarioSession,
    store: &ModelStore,
    engine: &dyn Engine,
) -> AppResult<RunRecord> {
    if !session.can_submit() {
        return Err(AppError::DraftNotAdmissible);
    }

    let draft = &session.draft;
    tracing::info!(scenario = %draft.scenario_name, model = %draft.model_name, "submitting scenario");

    let scenario_json = serde_json::to_string(&serialize_scenario(draft)?)
        .map_err(|e| AppError::Scenario(e.to_string()))?;
    let reference_json = serde_json::to_string(&serialize_reference(&draft.reference)?)
        .map_err(|e| AppError::Scenario(e.to_string()))?;
    let model_json = store.raw_document(&draft.model_name)?;
    let t = parse_integer(&draft.t).map_err(|e| AppError::Scenario(e.to_string()))?;

    let result_json = engine.solve(
        &scenario_json,
        &model_json,
        &draft.scenario_name,
        &reference_json,
        t,
    )?;

    let result = mpc_results::parse_simulation(&result_json)?;
    tracing::info!(scenario = %result.scenario, t = result.t, "simulation parsed");

    Ok(RunRecord {
        scenario_name: draft.scenario_name.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        result,
    })
}
