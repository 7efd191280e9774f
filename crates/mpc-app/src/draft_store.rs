//! Draft snapshot storage.

use mpc_scenario::ScenarioDraft;
use std::fs;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Single-file draft snapshot, written after every mutation and restored on
/// session start.
#[derive(Clone)]
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Restore the snapshot, `None` when no snapshot exists yet.
    pub fn load(&self) -> AppResult<Option<ScenarioDraft>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| AppError::DraftFileRead {
            path: self.path.clone(),
            source: e,
        })?;

        let draft = serde_json::from_str(&content)
            .map_err(|e| AppError::Scenario(format!("Failed to parse draft snapshot: {}", e)))?;
        Ok(Some(draft))
    }

    pub fn save(&self, draft: &ScenarioDraft) -> AppResult<()> {
        let content = serde_json::to_string_pretty(draft)
            .map_err(|e| AppError::Scenario(format!("Failed to serialize draft: {}", e)))?;

        fs::write(&self.path, content).map_err(|e| AppError::DraftFileWrite {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }
}
