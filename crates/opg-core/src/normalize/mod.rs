//! Document normalization: rewrites a raw document into a canonical,
//! fully-named form the emitters can consume.
//!
//! The passes run strictly in sequence over the shared components table:
//! operation-id assignment first, then the transactional request-body
//! rename plan, then per-operation schema synthesis and response ordering.

pub mod operation_id;
pub mod query_params;
pub mod request_body;
pub mod responses;

use serde::Deserialize;

use crate::document::{
    Components, Document, ParameterLocation, RequestBody, RequestBodyOrRef, Schema, SchemaOrRef,
    components,
};
use crate::error::NormalizeError;

/// What to do when a synthesized component name collides with a distinct
/// existing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Abort normalization with a descriptive error.
    #[default]
    Fail,
    /// Replace the existing entry, keeping the original silent-override
    /// behavior.
    Overwrite,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    pub collision_policy: CollisionPolicy,
}

/// Normalize a document in place with default options.
pub fn normalize(doc: &mut Document) -> Result<(), NormalizeError> {
    normalize_with_options(doc, &NormalizeOptions::default())
}

/// Normalize a document in place.
///
/// Idempotent: running this on its own output creates no new schemas and
/// performs no further renames.
pub fn normalize_with_options(
    doc: &mut Document,
    options: &NormalizeOptions,
) -> Result<(), NormalizeError> {
    operation_id::assign_operation_ids(doc);

    let plan = request_body::collect_rename_plan(doc)?;
    request_body::apply_rename_plan(doc, plan, options)?;

    let Document {
        paths, components, ..
    } = doc;

    for item in paths.values_mut() {
        for (_, op) in item.operations_mut() {
            if !op.parameters.is_empty() {
                query_params::synthesize_parameter_schema(
                    op,
                    components,
                    ParameterLocation::Query,
                    options,
                )?;
            }

            if op.request_body.is_some() {
                request_body::promote_inline_body(op, components, options)?;
            }

            if !op.responses.is_empty() {
                responses::sort_responses(op);
            }
        }
    }

    Ok(())
}

/// Insert a synthesized schema, tolerating an identical existing entry so
/// repeated normalization is a no-op.
pub(crate) fn insert_schema_checked(
    components: &mut Components,
    name: &str,
    schema: Schema,
    options: &NormalizeOptions,
) -> Result<(), NormalizeError> {
    match components.schemas.get(name) {
        Some(existing) if *existing == schema => Ok(()),
        Some(_) => match options.collision_policy {
            CollisionPolicy::Fail => Err(NormalizeError::DuplicateComponent {
                name: name.to_string(),
            }),
            CollisionPolicy::Overwrite => {
                log::warn!("overwriting components schema `{name}`");
                components.schemas.insert(name.to_string(), schema);
                Ok(())
            }
        },
        None => {
            components.schemas.insert(name.to_string(), schema);
            Ok(())
        }
    }
}

pub(crate) fn insert_request_body_checked(
    components: &mut Components,
    name: &str,
    body: RequestBody,
    options: &NormalizeOptions,
) -> Result<(), NormalizeError> {
    match components.request_bodies.get(name) {
        Some(existing) if *existing == body => Ok(()),
        Some(_) => match options.collision_policy {
            CollisionPolicy::Fail => Err(NormalizeError::DuplicateComponent {
                name: name.to_string(),
            }),
            CollisionPolicy::Overwrite => {
                log::warn!("overwriting components request body `{name}`");
                components.request_bodies.insert(name.to_string(), body);
                Ok(())
            }
        },
        None => {
            components.request_bodies.insert(name.to_string(), body);
            Ok(())
        }
    }
}

/// Verify that every reference in the document resolves to a components
/// entry. Used after normalization and by `opg validate`.
pub fn check_references(doc: &Document) -> Result<(), NormalizeError> {
    for item in doc.paths.values() {
        for (_, op) in item.operations() {
            let op_id = op.operation_id.as_deref().unwrap_or_default();

            if let Some(RequestBodyOrRef::Ref { ref_path }) = &op.request_body {
                let name = components::simple_ref(ref_path)?;
                if !doc.components.request_bodies.contains_key(name) {
                    return Err(NormalizeError::MissingReference {
                        operation_id: op_id.to_string(),
                        reference: ref_path.clone(),
                    });
                }
            }

            for param in &op.parameters {
                if let Some(schema) = &param.schema {
                    check_schema_refs(schema, op_id, &doc.components)?;
                }
            }

            for response in op.responses.values() {
                for media in response.content.values() {
                    if let Some(schema) = &media.schema {
                        check_schema_refs(schema, op_id, &doc.components)?;
                    }
                }
            }
        }
    }

    for body in doc.components.request_bodies.values() {
        for media in body.content.values() {
            if let Some(schema) = &media.schema {
                check_schema_refs(schema, "", &doc.components)?;
            }
        }
    }

    for schema in doc.components.schemas.values() {
        check_schema_fields(schema, "", &doc.components)?;
    }

    Ok(())
}

fn check_schema_refs(
    schema: &SchemaOrRef,
    op_id: &str,
    components: &Components,
) -> Result<(), NormalizeError> {
    match schema {
        SchemaOrRef::Ref { ref_path } => {
            let name = components::simple_ref(ref_path)?;
            if !components.schemas.contains_key(name) {
                return Err(NormalizeError::MissingReference {
                    operation_id: op_id.to_string(),
                    reference: ref_path.clone(),
                });
            }
            Ok(())
        }
        SchemaOrRef::Schema(schema) => check_schema_fields(schema, op_id, components),
    }
}

fn check_schema_fields(
    schema: &Schema,
    op_id: &str,
    components: &Components,
) -> Result<(), NormalizeError> {
    for prop in schema.properties.values() {
        check_schema_refs(prop, op_id, components)?;
    }
    if let Some(items) = &schema.items {
        check_schema_refs(items, op_id, components)?;
    }
    for member in schema
        .all_of
        .iter()
        .chain(&schema.one_of)
        .chain(&schema.any_of)
    {
        check_schema_refs(member, op_id, components)?;
    }
    Ok(())
}
