use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::request_body::RequestBody;
use super::schema::Schema;
use crate::error::NormalizeError;

pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";
pub const REQUEST_BODY_REF_PREFIX: &str = "#/components/requestBodies/";

/// The document's shared namespace of reusable named schemas and request
/// bodies. Every `$ref` in the document must resolve to a key in one of
/// these tables once normalization completes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub schemas: IndexMap<String, Schema>,

    #[serde(
        rename = "requestBodies",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub request_bodies: IndexMap<String, RequestBody>,
}

impl Components {
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty() && self.request_bodies.is_empty()
    }

    /// Move a schema entry from `from` to `to` in one step, so no caller can
    /// observe a state where both names (or neither) exist.
    pub fn relocate_schema(&mut self, from: &str, to: &str) -> Option<()> {
        let schema = self.schemas.shift_remove(from)?;
        self.schemas.insert(to.to_string(), schema);
        Some(())
    }

    /// Move a request-body entry from `from` to `to` in one step.
    pub fn relocate_request_body(&mut self, from: &str, to: &str) -> Option<()> {
        let body = self.request_bodies.shift_remove(from)?;
        self.request_bodies.insert(to.to_string(), body);
        Some(())
    }
}

/// Build a full schema reference string for a component name.
pub fn schema_ref(name: &str) -> String {
    format!("{SCHEMA_REF_PREFIX}{name}")
}

/// Build a full request-body reference string for a component name.
pub fn request_body_ref(name: &str) -> String {
    format!("{REQUEST_BODY_REF_PREFIX}{name}")
}

/// Extract the short component name from a reference string.
///
/// Accepts full `#/components/schemas/...` and
/// `#/components/requestBodies/...` pointers as well as bare short names
/// (some producers write `$ref: Foo` after their own rewriting).
pub fn simple_ref(ref_path: &str) -> Result<&str, NormalizeError> {
    if let Some(rest) = ref_path
        .strip_prefix(SCHEMA_REF_PREFIX)
        .or_else(|| ref_path.strip_prefix(REQUEST_BODY_REF_PREFIX))
    {
        if rest.is_empty() || rest.contains('/') {
            return Err(NormalizeError::InvalidRefFormat(ref_path.to_string()));
        }
        return Ok(rest);
    }
    if !ref_path.is_empty() && !ref_path.contains('/') {
        return Ok(ref_path);
    }
    Err(NormalizeError::InvalidRefFormat(ref_path.to_string()))
}
