//! Identifier policy: maps raw document names to valid PHP identifiers.
//!
//! The target type system collapses compound shapes into plain arrays, so
//! the naming rules here are deliberately permissive: a raw name that cannot
//! be improved is passed through rather than rejected.

use heck::{ToLowerCamelCase, ToPascalCase, ToSnakeCase};

use crate::document::{Schema, SchemaType};

/// Token used where no single concrete type can be named.
pub const MIXED_TYPE: &str = "mixed";

/// PHP's universal base object.
pub const STD_CLASS: &str = "\\stdClass";

/// Base casing transform: UpperCamelCase.
pub fn camelize(raw: &str) -> String {
    raw.to_pascal_case()
}

/// Base casing transform: snake_case.
pub fn underscore(raw: &str) -> String {
    raw.to_snake_case()
}

/// Turn a raw name into a valid variable identifier.
///
/// Names starting with a digit get the `prefixNumber` marker verbatim;
/// names starting with `@` get an `_at` marker before the base camel-casing
/// transform. Idempotent: valid output maps to itself.
pub fn to_var_name(raw: &str) -> String {
    if raw.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return format!("prefixNumber{raw}");
    }

    if raw.starts_with('@') {
        return format!("_at{raw}").to_lower_camel_case();
    }

    raw.to_lower_camel_case()
}

/// Accessor name derivation, shared by getter, setter, and boolean getter.
///
/// Intentionally not capitalized the PHP way: accessors reuse the variable
/// identifier unchanged, trading idiom for simplicity.
pub fn getter_and_setter_capitalize(raw: &str) -> String {
    if raw.is_empty() {
        return raw.to_string();
    }
    to_var_name(raw)
}

pub fn to_getter(raw: &str) -> String {
    getter_and_setter_capitalize(raw)
}

pub fn to_setter(raw: &str) -> String {
    getter_and_setter_capitalize(raw)
}

pub fn to_boolean_getter(raw: &str) -> String {
    getter_and_setter_capitalize(raw)
}

/// Turn a raw schema name into a model name.
pub fn to_model_name(raw: &str) -> String {
    if raw == MIXED_TYPE {
        return raw.to_string();
    }

    if raw == "Object" {
        return STD_CLASS.to_string();
    }

    camelize(raw)
}

/// Name a composed schema (allOf / oneOf / anyOf).
///
/// A composition constrained to strings stays `string`; a single named
/// member keeps that member's model name; anything with more than one
/// concrete member cannot be represented in the collapsed type system and
/// degrades to the mixed marker instead of failing generation.
pub fn to_composed_name(member_names: &[String], schema: &Schema) -> String {
    if schema.schema_type == Some(SchemaType::String) {
        return "string".to_string();
    }

    if let [name] = member_names {
        return to_model_name(name);
    }

    MIXED_TYPE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn var_name_plain() {
        assert_eq!(to_var_name("current_page"), "currentPage");
        assert_eq!(to_var_name("currentPage"), "currentPage");
    }

    #[test]
    fn var_name_leading_digit() {
        assert_eq!(to_var_name("1x"), "prefixNumber1x");
        assert_eq!(to_var_name("123abc"), "prefixNumber123abc");
    }

    #[test]
    fn var_name_at_marker() {
        assert_eq!(to_var_name("@mention"), "atMention");
        assert_eq!(to_var_name("@timestamp"), "atTimestamp");
    }

    #[test]
    fn var_name_idempotent() {
        for raw in ["currentPage", "prefixNumber1x", "@mention", "x"] {
            let once = to_var_name(raw);
            assert_eq!(to_var_name(&once), once);
        }
    }

    #[test]
    fn accessor_names_share_var_name() {
        assert_eq!(getter_and_setter_capitalize(""), "");
        assert_eq!(to_getter("current_page"), "currentPage");
        assert_eq!(to_setter("current_page"), "currentPage");
        assert_eq!(to_boolean_getter("is_done"), "isDone");
    }

    #[test]
    fn model_name_special_tokens() {
        assert_eq!(to_model_name("mixed"), "mixed");
        assert_eq!(to_model_name("Object"), "\\stdClass");
        assert_eq!(to_model_name("search_result"), "SearchResult");
    }

    #[test]
    fn composed_name_string_constrained() {
        let schema = Schema {
            schema_type: Some(SchemaType::String),
            ..Default::default()
        };
        let names = vec!["A".to_string(), "B".to_string()];
        assert_eq!(to_composed_name(&names, &schema), "string");
    }

    #[test]
    fn composed_name_single_member() {
        let schema = Schema::default();
        assert_eq!(
            to_composed_name(&["search_result".to_string()], &schema),
            "SearchResult"
        );
    }

    #[test]
    fn composed_name_multiple_members() {
        let schema = Schema::default();
        let names = vec!["A".to_string(), "B".to_string()];
        assert_eq!(to_composed_name(&names, &schema), "mixed");
        assert_eq!(to_composed_name(&[], &schema), "mixed");
    }
}
