//! Per-model default tuning.

use crate::schema::ScenarioDraft;
use crate::ScenarioResult;
use std::collections::BTreeMap;

/// Explicit mapping from model name to a registered default draft.
///
/// Injected wherever defaults are wanted; there is no implicitly loaded
/// resource. Models without an entry start from [`ScenarioDraft::blank`].
#[derive(Debug, Clone, Default)]
pub struct DefaultsTable {
    entries: BTreeMap<String, ScenarioDraft>,
}

impl DefaultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, model_name: impl Into<String>, draft: ScenarioDraft) {
        self.entries.insert(model_name.into(), draft);
    }

    pub fn get(&self, model_name: &str) -> Option<&ScenarioDraft> {
        self.entries.get(model_name)
    }

    /// Load a table from a JSON document mapping model name to draft.
    pub fn from_json_str(content: &str) -> ScenarioResult<Self> {
        let entries: BTreeMap<String, ScenarioDraft> = serde_json::from_str(content)?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
