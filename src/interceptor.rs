//! Decides whether a setter-style call belongs to the builder protocol.

use crate::config::{BuilderConfig, PrefixMatch};
use crate::naming::{remove_leading_prefix, remove_prefix, to_variable_name};
use serde_json::Value;

/// Resolve a call `method(argument)` to the canonical field name it sets.
///
/// - `WithMessage("hi")` resolves to `message`.
/// - `IsTrue(true)` has no prefix but a boolean argument, so it resolves
///   to `isTrue`.
/// - `Message("hi")` has neither and is rejected with `None`.
///
/// A boolean call keeps its name as-is even when it carries the prefix, so
/// `WithIsTrue(true)` resolves to `withIsTrue`, unless
/// `BuilderConfig::strip_boolean_prefix` is set.
pub fn resolve_call(method: &str, argument: &Value, config: &BuilderConfig) -> Option<String> {
    let prefixed = matches_prefix(method, config);
    let field = if argument.is_boolean() && !(prefixed && config.strip_boolean_prefix) {
        method.to_string()
    } else if prefixed {
        strip(method, config)
    } else {
        return None;
    };

    if field.is_empty() {
        return None;
    }

    Some(to_variable_name(&field))
}

fn matches_prefix(method: &str, config: &BuilderConfig) -> bool {
    if config.prefix.is_empty() {
        return true;
    }
    match config.prefix_match {
        PrefixMatch::Anywhere => method.contains(config.prefix.as_str()),
        PrefixMatch::Leading => method.starts_with(config.prefix.as_str()),
    }
}

fn strip(method: &str, config: &BuilderConfig) -> String {
    match config.prefix_match {
        PrefixMatch::Anywhere => remove_prefix(method, &config.prefix),
        PrefixMatch::Leading => remove_leading_prefix(method, &config.prefix),
    }
}

/// Short description of a value's kind, for error messages.
pub(crate) fn describe_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}
