//! mpc-results: engine result document parsing.

pub mod parse;
pub mod types;

pub use parse::parse_simulation;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("Malformed result document: {detail}")]
    Malformed { detail: String },
}
