//! Read-only model document store.

use crate::schema::{ModelDefinition, ModelDocument};
use crate::{ModelError, ModelResult};
use std::fs;
use std::path::PathBuf;

/// Directory-backed model catalog, one `<name>.json` document per model.
///
/// The store never creates or writes files; the model library is owned by
/// whoever ships the documents.
#[derive(Clone)]
pub struct ModelStore {
    root_dir: PathBuf,
}

impl ModelStore {
    pub fn new(root_dir: PathBuf) -> Self {
        Self { root_dir }
    }

    fn model_path(&self, name: &str) -> PathBuf {
        self.root_dir.join(format!("{}.json", name))
    }

    pub fn has_model(&self, name: &str) -> bool {
        self.model_path(name).exists()
    }

    /// Names of all available models, sorted.
    pub fn list_models(&self) -> ModelResult<Vec<String>> {
        let mut names = Vec::new();

        if !self.root_dir.exists() {
            return Ok(names);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem()
            {
                names.push(stem.to_string_lossy().to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Load and convert a model document.
    pub fn load_model(&self, name: &str) -> ModelResult<ModelDefinition> {
        let content = self.raw_document(name)?;
        let document: ModelDocument = serde_json::from_str(&content)?;
        document.into_definition(name)
    }

    /// The verbatim document text, as handed to the engine.
    pub fn raw_document(&self, name: &str) -> ModelResult<String> {
        let path = self.model_path(name);

        if !path.exists() {
            return Err(ModelError::UnknownModel {
                name: name.to_string(),
            });
        }

        Ok(fs::read_to_string(path)?)
    }
}
