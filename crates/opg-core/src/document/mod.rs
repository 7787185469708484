pub mod components;
pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod request_body;
pub mod response;
pub mod schema;
pub mod spec;

pub use components::Components;
pub use media_type::MediaType;
pub use operation::{HttpMethod, Operation, PathItem};
pub use parameter::{Parameter, ParameterLocation};
pub use request_body::{RequestBody, RequestBodyOrRef};
pub use response::Response;
pub use schema::{Schema, SchemaOrRef, SchemaType};
pub use spec::{Document, Info};

use crate::error::ParseError;

/// Parse an API description document from YAML.
pub fn from_yaml(input: &str) -> Result<Document, ParseError> {
    let doc: Document = serde_yaml_ng::from_str(input)?;
    validate_version(&doc)?;
    Ok(doc)
}

/// Parse an API description document from JSON.
pub fn from_json(input: &str) -> Result<Document, ParseError> {
    let doc: Document = serde_json::from_str(input)?;
    validate_version(&doc)?;
    Ok(doc)
}

fn validate_version(doc: &Document) -> Result<(), ParseError> {
    if !doc.openapi.starts_with("3.") {
        return Err(ParseError::UnsupportedVersion(doc.openapi.clone()));
    }
    Ok(())
}
