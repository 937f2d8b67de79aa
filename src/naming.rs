//! Conversions between public (`FieldName`) and variable (`fieldName`) names.
//!
//! Only the first character changes case; there is no word splitting, so
//! `URLPath` becomes `uRLPath` and back.

/// `PublicName` -> `publicName`.
pub fn to_variable_name(name: &str) -> String {
    map_first_char(name, char::to_lowercase)
}

/// `variableName` -> `VariableName`.
pub fn to_public_name(name: &str) -> String {
    map_first_char(name, char::to_uppercase)
}

/// Remove every occurrence of `prefix` from `name`, not only a leading one.
///
/// `WithWithdrawal` loses both `With`s and yields `drawal`.
pub fn remove_prefix(name: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return name.to_string();
    }
    name.replace(prefix, "")
}

/// Remove `prefix` only when `name` starts with it.
pub fn remove_leading_prefix(name: &str, prefix: &str) -> String {
    name.strip_prefix(prefix).unwrap_or(name).to_string()
}

fn map_first_char<I>(name: &str, map: impl FnOnce(char) -> I) -> String
where
    I: Iterator<Item = char>,
{
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => map(first).chain(chars).collect(),
        None => String::new(),
    }
}
