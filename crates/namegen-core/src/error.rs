use thiserror::Error;

use crate::context::WordTableError;
use crate::source::TransportError;
use crate::template::{EvalError, ParseError};

#[derive(Error, Debug)]
pub enum NamegenError {
    // Template errors
    #[error("TEMPLATE_PARSE_ERROR: {0}")]
    Parse(#[from] ParseError),

    #[error("NAME_EVAL_ERROR: {0}")]
    Eval(#[from] EvalError),

    #[error("NAME_GENERATION_FAILED: request '{id}': {source}")]
    Request {
        id: String,
        #[source]
        source: EvalError,
    },

    // Source errors
    #[error("SOURCE_FETCH_FAILED: {0}")]
    Transport(#[from] TransportError),

    #[error("WORD_TABLE_INVALID: {0}")]
    WordTable(#[from] WordTableError),

    // Config errors
    #[error("CONFIG_NOT_FOUND: {0}")]
    ConfigNotFound(String),

    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<serde_json::Error> for NamegenError {
    fn from(err: serde_json::Error) -> Self {
        NamegenError::Generic(format!("JSON error: {}", err))
    }
}

impl From<toml::de::Error> for NamegenError {
    fn from(err: toml::de::Error) -> Self {
        NamegenError::ConfigParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NamegenError>;
