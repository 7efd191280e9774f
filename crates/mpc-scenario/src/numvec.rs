//! Parsers for the free-text numeric fields.
//!
//! The UI convention is a bracketed, comma-delimited vector: `"[1, 100]"`.
//! At most one leading `[` and one trailing `]` are stripped; empty content
//! is the empty vector. A token that fails to parse is a typed error, never
//! a NaN entry.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumVecError {
    #[error("not a number: '{token}'")]
    BadToken { token: String },

    #[error("not an integer: '{text}'")]
    BadInteger { text: String },
}

/// Parse a bracketed comma-delimited vector of floats.
pub fn parse_vector(text: &str) -> Result<Vec<f64>, NumVecError> {
    let mut inner = text.trim();
    inner = inner.strip_prefix('[').unwrap_or(inner);
    inner = inner.strip_suffix(']').unwrap_or(inner);
    let inner = inner.trim();

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<f64>().map_err(|_| NumVecError::BadToken {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parse a whole-token integer field.
pub fn parse_integer(text: &str) -> Result<i64, NumVecError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| NumVecError::BadInteger {
            text: text.trim().to_string(),
        })
}
