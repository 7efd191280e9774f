//! Shared application service layer for mpcbench.
//!
//! This crate provides a unified interface for frontends, centralizing the
//! editing session, the admissibility gate, the engine call boundary, and
//! result handling. Frontends own presentation state (including the busy
//! flag while a solve is outstanding); nothing here blocks re-entry.

pub mod draft_store;
pub mod engine;
pub mod error;
pub mod run_service;
pub mod session;

// Re-export key types for convenience
pub use draft_store::DraftStore;
pub use engine::{Engine, EngineError};
pub use error::{AppError, AppResult};
pub use run_service::{RunRecord, run_scenario};
pub use session::ScenarioSession;
