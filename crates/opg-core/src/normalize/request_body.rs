use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use crate::document::{
    Components, Document, Operation, RequestBody, RequestBodyOrRef, SchemaOrRef, components,
};
use crate::error::NormalizeError;
use crate::naming::camelize;

use super::{
    CollisionPolicy, NormalizeOptions, insert_request_body_checked, insert_schema_checked,
};

/// One planned relocation of a shared request-body component to an
/// operation-scoped name.
#[derive(Debug, Clone)]
pub struct RenameIntent {
    pub operation_id: String,
    /// Original reference string, kept for error reporting.
    pub reference: String,
    /// Short name of the referenced component.
    pub source: String,
    /// `<operationId>Body`.
    pub target: String,
}

/// Collect every referenced request body's rename intent across the whole
/// document before touching the components table, so the outcome does not
/// depend on which operation happens to be walked first.
pub fn collect_rename_plan(doc: &Document) -> Result<Vec<RenameIntent>, NormalizeError> {
    let mut plan: Vec<RenameIntent> = Vec::new();

    for item in doc.paths.values() {
        for (_, op) in item.operations() {
            let Some(RequestBodyOrRef::Ref { ref_path }) = &op.request_body else {
                continue;
            };
            let Some(op_id) = op.operation_id.as_deref() else {
                continue;
            };

            let source = components::simple_ref(ref_path)?.to_string();
            let target = format!("{op_id}Body");

            // Already operation-scoped, nothing to rename.
            if source == target {
                continue;
            }

            if plan.iter().any(|intent| intent.target == target) {
                return Err(NormalizeError::RenameConflict { target });
            }

            plan.push(RenameIntent {
                operation_id: op_id.to_string(),
                reference: ref_path.clone(),
                source,
                target,
            });
        }
    }

    Ok(plan)
}

/// Apply a rename plan transactionally: every source and target is validated
/// against the components table before the first relocation, and a source shared by
/// several operations fans out into one clone per operation so no operation
/// is left pointing at a removed entry.
pub fn apply_rename_plan(
    doc: &mut Document,
    plan: Vec<RenameIntent>,
    options: &NormalizeOptions,
) -> Result<(), NormalizeError> {
    if plan.is_empty() {
        return Ok(());
    }

    for intent in &plan {
        if !doc.components.schemas.contains_key(&intent.source)
            || !doc.components.request_bodies.contains_key(&intent.source)
        {
            return Err(NormalizeError::MissingReference {
                operation_id: intent.operation_id.clone(),
                reference: intent.reference.clone(),
            });
        }
    }

    // A target occupied by an unrelated entry is a collision; a target that
    // is itself a source gets vacated by its own rename first.
    let vacated: HashSet<&str> = plan.iter().map(|intent| intent.source.as_str()).collect();
    for intent in &plan {
        if vacated.contains(intent.target.as_str()) {
            continue;
        }
        let schema_clash = doc
            .components
            .schemas
            .get(&intent.target)
            .is_some_and(|existing| doc.components.schemas.get(&intent.source) != Some(existing));
        let body_clash = doc.components.request_bodies.get(&intent.target).is_some_and(
            |existing| doc.components.request_bodies.get(&intent.source) != Some(existing),
        );
        if schema_clash || body_clash {
            match options.collision_policy {
                CollisionPolicy::Fail => {
                    return Err(NormalizeError::DuplicateComponent {
                        name: intent.target.clone(),
                    });
                }
                CollisionPolicy::Overwrite => {
                    log::warn!("overwriting components entry `{}` during rename", intent.target);
                }
            }
        }
    }

    let mut op_targets: HashMap<String, String> = plan
        .iter()
        .map(|intent| (intent.operation_id.clone(), intent.target.clone()))
        .collect();

    let mut by_source: IndexMap<String, Vec<RenameIntent>> = IndexMap::new();
    for intent in plan {
        by_source.entry(intent.source.clone()).or_default().push(intent);
    }

    for (source, intents) in by_source {
        if let [intent] = intents.as_slice() {
            // Sole owner: a plain atomic relocation in both tables.
            doc.components.relocate_schema(&source, &intent.target);
            doc.components.relocate_request_body(&source, &intent.target);
            if let Some(body) = doc.components.request_bodies.get_mut(&intent.target) {
                rewrite_body_schema_refs(body, &intent.target);
            }
            continue;
        }

        // Shared component: clone under every operation-scoped name, then
        // retire the original once no operation needs it anymore.
        let schema = match doc.components.schemas.get(&source) {
            Some(schema) => schema.clone(),
            None => continue,
        };
        let body = match doc.components.request_bodies.get(&source) {
            Some(body) => body.clone(),
            None => continue,
        };

        for intent in &intents {
            insert_schema_checked(&mut doc.components, &intent.target, schema.clone(), options)?;
            let mut clone = body.clone();
            rewrite_body_schema_refs(&mut clone, &intent.target);
            insert_request_body_checked(&mut doc.components, &intent.target, clone, options)?;
        }

        doc.components.schemas.shift_remove(&source);
        doc.components.request_bodies.shift_remove(&source);
        log::debug!(
            "request body `{source}` shared by {} operations, split per operation",
            intents.len()
        );
    }

    // Point each operation at its own component.
    for item in doc.paths.values_mut() {
        for (_, op) in item.operations_mut() {
            let Some(op_id) = op.operation_id.as_deref() else {
                continue;
            };
            if let Some(target) = op_targets.remove(op_id) {
                op.request_body = Some(RequestBodyOrRef::Ref {
                    ref_path: components::request_body_ref(&target),
                });
            }
        }
    }

    Ok(())
}

/// Promote an operation's inline request-body schema into the components
/// table under `<operationId>Body` and rewire the operation to reference it.
pub fn promote_inline_body(
    op: &mut Operation,
    components_table: &mut Components,
    options: &NormalizeOptions,
) -> Result<(), NormalizeError> {
    let Some(op_id) = op.operation_id.as_deref() else {
        return Ok(());
    };
    let body = match &op.request_body {
        Some(RequestBodyOrRef::RequestBody(body)) => body.clone(),
        // Referenced bodies are handled by the rename plan.
        _ => return Ok(()),
    };

    let inline_schema = body.content.values().find_map(|media| match &media.schema {
        Some(SchemaOrRef::Schema(schema)) => Some(schema.as_ref().clone()),
        _ => None,
    });
    let Some(schema) = inline_schema else {
        log::debug!("operation `{op_id}`: request body has no inline schema, skipping promotion");
        return Ok(());
    };

    let name = format!("{op_id}Body");
    insert_schema_checked(components_table, &name, schema, options)?;

    let mut component_body = body;
    for media in component_body.content.values_mut() {
        // Only inline schemas point at the promoted component; a media type
        // already referencing another schema keeps its target.
        if matches!(media.schema, Some(SchemaOrRef::Schema(_))) {
            media.schema = Some(SchemaOrRef::Ref {
                ref_path: components::schema_ref(&name),
            });
        }
    }
    component_body.description = Some(camelize(&name));
    insert_request_body_checked(components_table, &name, component_body, options)?;

    op.request_body = Some(RequestBodyOrRef::Ref {
        ref_path: components::request_body_ref(&name),
    });

    Ok(())
}

fn rewrite_body_schema_refs(body: &mut RequestBody, target: &str) {
    for media in body.content.values_mut() {
        if let Some(SchemaOrRef::Ref { ref_path }) = &mut media.schema {
            *ref_path = components::schema_ref(target);
        }
    }
}
