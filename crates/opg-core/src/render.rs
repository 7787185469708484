//! Render-time metadata handed to the emission engine.

use serde::Serialize;

use crate::document::{Operation, SchemaOrRef};
use crate::naming::{MIXED_TYPE, camelize, to_var_name, underscore};
use crate::typemap::{array_default_literal, type_declaration};

/// Visibility scope assumed when `x-operation-scope` is absent.
pub const DEFAULT_SCOPE: &str = "public";

/// Naming variants and visibility for one operation, consumed by templates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationRenderInfo {
    pub operation_id: String,
    pub operation_id_lower: String,
    pub operation_id_camel: String,
    pub operation_id_snake: String,
    pub scope: String,
    pub add_to_documentation: bool,
}

pub fn operation_render_info(op: &Operation) -> OperationRenderInfo {
    let id = op.operation_id.clone().unwrap_or_default();
    let scope = op
        .operation_scope
        .clone()
        .unwrap_or_else(|| DEFAULT_SCOPE.to_string());

    OperationRenderInfo {
        operation_id_lower: id.to_lowercase(),
        operation_id_camel: camelize(&id),
        operation_id_snake: underscore(&id),
        add_to_documentation: scope == DEFAULT_SCOPE,
        scope,
        operation_id: id,
    }
}

/// Type and naming metadata for one generated property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRenderInfo {
    pub name: String,
    pub var_name: String,
    pub type_token: String,
    /// Set to the mixed marker when the property's schema is untyped, so
    /// the renderer never emits a concrete type reference for it.
    pub complex_type: Option<String>,
    pub required: bool,
    pub default_literal: Option<String>,
    pub description: Option<String>,
}

pub fn property_render_info(name: &str, schema: &SchemaOrRef, required: bool) -> PropertyRenderInfo {
    let type_token = type_declaration(schema);
    let complex_type = (type_token == MIXED_TYPE).then(|| MIXED_TYPE.to_string());

    let (default_literal, description) = match schema {
        SchemaOrRef::Schema(schema) => {
            (array_default_literal(schema), schema.description.clone())
        }
        SchemaOrRef::Ref { .. } => (None, None),
    };

    PropertyRenderInfo {
        name: name.to_string(),
        var_name: to_var_name(name),
        type_token,
        complex_type,
        required,
        default_literal,
        description,
    }
}
