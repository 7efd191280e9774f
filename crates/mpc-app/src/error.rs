//! Error types for the mpc-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Model catalog error: {0}")]
    Model(String),

    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Draft is not admissible for submission")]
    DraftNotAdmissible,

    #[error("No model selected")]
    NoModelSelected,

    #[error("Engine rejected the scenario: {message}")]
    Engine { message: String },

    #[error("Result error: {0}")]
    Result(String),

    #[error("Failed to read draft file: {path}")]
    DraftFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write draft file: {path}")]
    DraftFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for mpc-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<mpc_model::ModelError> for AppError {
    fn from(err: mpc_model::ModelError) -> Self {
        AppError::Model(err.to_string())
    }
}

impl From<mpc_scenario::ScenarioError> for AppError {
    fn from(err: mpc_scenario::ScenarioError) -> Self {
        AppError::Scenario(err.to_string())
    }
}

impl From<mpc_results::ResultsError> for AppError {
    fn from(err: mpc_results::ResultsError) -> Self {
        AppError::Result(err.to_string())
    }
}

impl From<crate::engine::EngineError> for AppError {
    fn from(err: crate::engine::EngineError) -> Self {
        AppError::Engine {
            message: err.message,
        }
    }
}
