use thiserror::Error as ThisError;

///
/// CodingError
///

#[derive(Debug, ThisError)]
pub enum CodingError {
    #[error("missing value for key '{key}'")]
    MissingKey { key: &'static str },

    #[error("value for key '{key}' does not match the declared type: {source}")]
    TypeMismatch {
        key: &'static str,
        source: serde_json::Error,
    },

    #[error("failed to encode value for key '{key}': {source}")]
    Encode {
        key: &'static str,
        source: serde_json::Error,
    },

    #[error("expected a keyed object, found {found}")]
    NotAnObject { found: &'static str },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
