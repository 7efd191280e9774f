//! mpc-model: plant model catalog and document store.

pub mod schema;
pub mod store;

pub use schema::{ModelDefinition, ModelDocument, VariableDef};
pub use store::ModelStore;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No such system: {name}")]
    UnknownModel { name: String },

    #[error("Invalid model '{name}': {reason}")]
    InvalidModel { name: String, reason: String },
}
