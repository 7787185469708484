//! Type mapping policy for the PHP target.
//!
//! PHP has no structural record types usable across arbitrary shapes, so
//! array, map, object, model, and unresolved reference all collapse to the
//! one `array` token; shape distinctions survive only in documentation.

use crate::document::{Schema, SchemaOrRef, SchemaType};
use crate::naming::MIXED_TYPE;

/// The collapsed container token for every compound shape.
pub const ARRAY_TYPE: &str = "array";

/// Value-object class replacing plain date/date-time scalars.
pub const DATE_TIME_VALUE: &str = "\\ADS\\ValueObjects\\Implementation\\String\\DateTimeValue";

const PHP_PRIMITIVES: &[&str] = &[
    "bool", "boolean", "int", "integer", "double", "float", "string", "object", "array", "mixed",
    "number", "void", "byte",
];

/// Map a schema shape to its PHP type token.
pub fn type_declaration(schema: &SchemaOrRef) -> String {
    let schema = match schema {
        SchemaOrRef::Ref { .. } => return ARRAY_TYPE.to_string(),
        SchemaOrRef::Schema(schema) => schema,
    };

    if let Some(format) = schema.format.as_deref()
        && matches!(format, "date" | "date-time")
    {
        return DATE_TIME_VALUE.to_string();
    }

    if schema.is_composed() || schema.additional_properties.is_some() {
        return ARRAY_TYPE.to_string();
    }

    match schema.schema_type {
        Some(SchemaType::Array) | Some(SchemaType::Object) => ARRAY_TYPE.to_string(),
        Some(SchemaType::String) => "string".to_string(),
        Some(SchemaType::Integer) => "int".to_string(),
        Some(SchemaType::Number) => "float".to_string(),
        Some(SchemaType::Boolean) => "bool".to_string(),
        Some(SchemaType::Null) => "null".to_string(),
        None if !schema.properties.is_empty() => ARRAY_TYPE.to_string(),
        None => MIXED_TYPE.to_string(),
    }
}

/// Map a bare type name to its PHP type token.
///
/// `set` and `object` are aliases of the container token; date names map to
/// the value-object class; anything that is not a language primitive is a
/// modeled type, which also collapses to the container token.
pub fn type_declaration_for_name(name: &str) -> String {
    match name {
        "set" | "object" => ARRAY_TYPE.to_string(),
        "date" | "Date" | "DateTime" => DATE_TIME_VALUE.to_string(),
        n if PHP_PRIMITIVES.contains(&n) => n.to_string(),
        _ => ARRAY_TYPE.to_string(),
    }
}

/// Render an array schema's default value as a PHP list literal.
///
/// String items are quoted element by element; other item types use their
/// JSON rendering. Returns `None` for non-array schemas and schemas without
/// a default, which fall through to scalar default handling.
pub fn array_default_literal(schema: &Schema) -> Option<String> {
    if schema.schema_type != Some(SchemaType::Array) {
        return None;
    }

    let default = schema.default_value.as_ref()?;
    let elements = default.as_array()?;

    let string_items = matches!(
        schema.items.as_deref(),
        Some(SchemaOrRef::Schema(items)) if items.schema_type == Some(SchemaType::String)
    );

    let rendered: Vec<String> = elements
        .iter()
        .map(|el| {
            if string_items {
                format!("'{}'", el.as_str().map(str::to_string).unwrap_or_else(|| el.to_string()))
            } else {
                el.to_string()
            }
        })
        .collect();

    Some(format!("[{}]", rendered.join(", ")))
}
