use std::collections::HashSet;

use heck::ToLowerCamelCase;

use crate::document::{Document, HttpMethod};

/// Ensure every operation carries a non-empty, document-unique operationId.
///
/// Missing ids are derived deterministically from the path and lower-cased
/// method; duplicates get a numeric suffix in walk order so reruns produce
/// the same assignment.
pub fn assign_operation_ids(doc: &mut Document) {
    let mut used: HashSet<String> = HashSet::new();

    for (path, item) in doc.paths.iter_mut() {
        for (method, op) in item.operations_mut() {
            let id = match op.operation_id.as_deref() {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => generate_operation_id(path, method),
            };

            let unique = unique_id(id, &mut used);
            op.operation_id = Some(unique);
        }
    }
}

/// Derive an operationId from path and method, e.g.
/// `GET /users/{userId}` → `usersUserIdGet`.
pub fn generate_operation_id(path: &str, method: HttpMethod) -> String {
    let mut parts: Vec<String> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.replace(['{', '}'], ""))
        .collect();
    parts.push(method.as_str().to_lowercase());

    parts.join("_").to_lower_camel_case()
}

fn unique_id(base: String, used: &mut HashSet<String>) -> String {
    if used.insert(base.clone()) {
        return base;
    }

    let mut i = 2;
    loop {
        let candidate = format!("{base}{i}");
        if used.insert(candidate.clone()) {
            log::warn!("duplicate operationId `{base}`, renamed to `{candidate}`");
            return candidate;
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_from_path_and_method() {
        assert_eq!(generate_operation_id("/users", HttpMethod::Get), "usersGet");
        assert_eq!(
            generate_operation_id("/users/{userId}", HttpMethod::Delete),
            "usersUserIdDelete"
        );
        assert_eq!(
            generate_operation_id("/users/{userId}/messages", HttpMethod::Post),
            "usersUserIdMessagesPost"
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_operation_id("/pets/{petId}", HttpMethod::Patch);
        let b = generate_operation_id("/pets/{petId}", HttpMethod::Patch);
        assert_eq!(a, b);
    }

    #[test]
    fn suffixes_duplicates() {
        let mut used = HashSet::new();
        assert_eq!(unique_id("getUser".to_string(), &mut used), "getUser");
        assert_eq!(unique_id("getUser".to_string(), &mut used), "getUser2");
        assert_eq!(unique_id("getUser".to_string(), &mut used), "getUser3");
    }
}
