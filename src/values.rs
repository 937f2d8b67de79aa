//! Accumulated setter values and builder-declared defaults.

use crate::naming::to_variable_name;
use serde_json::Value;
use std::collections::hash_map::{self, HashMap};

/// Canonical field name -> last value set for it.
///
/// Entries are only ever inserted or overwritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulator {
    values: HashMap<String, Value>,
}

impl Accumulator {
    /// Store `value` under `name`, replacing any earlier value.
    pub fn record(&mut self, name: String, value: Value) -> Option<Value> {
        self.values.insert(name, value)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a Accumulator {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Default values a builder declares for names of the target.
///
/// Names may be given in either public (`SetByDefaultInBuilder`) or variable
/// form; they are stored in variable form so that an explicit call with the
/// same name overrides them.
///
/// ```
/// use dyn_fluent_builder::DeclaredDefaults;
///
/// let defaults = DeclaredDefaults::new()
///     .with("SetByDefaultInBuilder", "Dynamic code is fun code.")
///     .with("retries", 3);
///
/// assert_eq!(defaults.get("setByDefaultInBuilder").and_then(|v| v.as_str()),
///            Some("Dynamic code is fun code."));
/// assert_eq!(defaults.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclaredDefaults {
    values: HashMap<String, Value>,
}

impl DeclaredDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl AsRef<str>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<Value>) {
        self.values
            .insert(to_variable_name(name.as_ref()), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.values.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for DeclaredDefaults
where
    K: AsRef<str>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut defaults = DeclaredDefaults::new();
        for (name, value) in iter {
            defaults.insert(name, value);
        }
        defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn last_record_wins() {
        let mut values = Accumulator::default();
        assert_eq!(values.record("number".into(), json!(1)), None);
        assert_eq!(values.record("number".into(), json!(2)), Some(json!(1)));
        assert_eq!(values.get("number"), Some(&json!(2)));
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn declared_defaults_use_variable_names() {
        let defaults: DeclaredDefaults = [("Message", json!("hi")), ("number", json!(4))]
            .into_iter()
            .collect();

        assert_eq!(defaults.get("message"), Some(&json!("hi")));
        assert_eq!(defaults.get("Message"), None);
        assert_eq!(defaults.get("number"), Some(&json!(4)));
    }
}
