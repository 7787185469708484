use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported OpenAPI version: {0}")]
    UnsupportedVersion(String),
}

/// Errors raised while normalizing a document.
///
/// These are structural problems in the shared components table; none of
/// them is locally recoverable, so normalization aborts on the first one
/// and no partial output should be considered valid.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("operation `{operation_id}`: reference `{reference}` does not resolve to a components entry")]
    MissingReference {
        operation_id: String,
        reference: String,
    },

    #[error("components entry `{name}` already exists with a different definition")]
    DuplicateComponent { name: String },

    #[error("two request bodies would be renamed to the same components entry `{target}`")]
    RenameConflict { target: String },

    #[error("invalid reference format: {0}")]
    InvalidRefFormat(String),
}
