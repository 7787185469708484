use crate::document::{Components, Operation, ParameterLocation, Schema, SchemaType};
use crate::error::NormalizeError;
use crate::naming::camelize;

use super::{NormalizeOptions, insert_schema_checked};

/// Manufacture a named object schema from the operation's parameters in the
/// given location and register it in the components table.
///
/// The synthesized schema is emission metadata only: the parameter list
/// itself is left untouched, and consumers look properties up by name, so
/// parameter order is irrelevant. Zero matching parameters means no
/// mutation at all.
pub fn synthesize_parameter_schema(
    op: &Operation,
    components: &mut Components,
    location: ParameterLocation,
    options: &NormalizeOptions,
) -> Result<(), NormalizeError> {
    let Some(op_id) = op.operation_id.as_deref() else {
        return Ok(());
    };

    let matched: Vec<_> = op
        .parameters
        .iter()
        .filter(|p| p.location == location && p.schema.is_some())
        .collect();

    if matched.is_empty() {
        return Ok(());
    }

    let name = format!("{op_id}{}", camelize(location.as_str()));

    let mut schema = Schema {
        schema_type: Some(SchemaType::Object),
        ..Default::default()
    };
    for param in &matched {
        if let Some(param_schema) = &param.schema {
            schema
                .properties
                .insert(param.name.clone(), param_schema.clone());
        }
    }
    schema.required = matched
        .iter()
        .filter(|p| p.required)
        .map(|p| p.name.clone())
        .collect();

    log::debug!("synthesized parameter schema `{name}` for operation `{op_id}`");
    insert_schema_checked(components, &name, schema, options)
}
