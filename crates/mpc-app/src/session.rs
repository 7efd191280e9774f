//! Scenario editing session.

use mpc_model::{ModelDefinition, ModelStore};
use mpc_scenario::{DefaultsTable, ErrorMap, ScenarioDraft, admissible, validate};

use crate::error::{AppError, AppResult};

/// One editing session: the draft being worked on, the model it was built
/// against, and the injected per-model defaults.
///
/// Validation is pure and cheap, so `errors` and `can_submit` are safe to
/// call on every edit.
pub struct ScenarioSession {
    pub draft: ScenarioDraft,
    model: Option<ModelDefinition>,
    defaults: DefaultsTable,
}

impl ScenarioSession {
    pub fn new(defaults: DefaultsTable) -> Self {
        Self {
            draft: ScenarioDraft::blank(),
            model: None,
            defaults,
        }
    }

    /// Resume a session from a restored draft, reloading its model if one
    /// was selected.
    pub fn restore(draft: ScenarioDraft, store: &ModelStore, defaults: DefaultsTable) -> AppResult<Self> {
        let model = if draft.model_name.is_empty() {
            None
        } else {
            Some(store.load_model(&draft.model_name)?)
        };

        Ok(Self {
            draft,
            model,
            defaults,
        })
    }

    pub fn model(&self) -> Option<&ModelDefinition> {
        self.model.as_ref()
    }

    /// Select a model, replacing the draft wholesale: the registered
    /// default draft if one exists, a blank one otherwise. The reference
    /// vector is resized to the new model's CV count either way.
    pub fn select_model(&mut self, store: &ModelStore, name: &str) -> AppResult<()> {
        let model = store.load_model(name)?;

        let mut draft = self
            .defaults
            .get(name)
            .cloned()
            .unwrap_or_else(ScenarioDraft::blank);
        draft.model_name = name.to_string();
        draft.reset_reference(model.n_cv());

        self.draft = draft;
        self.model = Some(model);
        Ok(())
    }

    /// Recompute the full error map against the selected model.
    pub fn errors(&self) -> AppResult<ErrorMap> {
        let model = self.model.as_ref().ok_or(AppError::NoModelSelected)?;
        Ok(validate(&self.draft, model))
    }

    /// The submission gate.
    pub fn can_submit(&self) -> bool {
        match &self.model {
            Some(model) => admissible(&self.draft, model),
            None => false,
        }
    }
}
