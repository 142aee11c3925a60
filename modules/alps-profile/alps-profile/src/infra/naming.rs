//! Default relation names and description keys for exposed types.

/// Prefix of every generated description key.
pub const DESCRIPTION_KEY_PREFIX: &str = "rest.description";

/// `Person` -> `person`, `URLMapping` -> `uRLMapping`.
#[must_use]
pub fn uncapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// English plural of a relation name, good enough for resource paths.
#[must_use]
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_ascii_lowercase();
    if let Some(stem) = word.strip_suffix('y')
        && !stem.ends_with(['a', 'e', 'i', 'o', 'u'])
    {
        return format!("{stem}ies");
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|s| lower.ends_with(s)) {
        return format!("{word}es");
    }
    format!("{word}s")
}

/// Description key of a resource relation (`rest.description.person`).
#[must_use]
pub fn resource_key(rel: &str) -> String {
    format!("{DESCRIPTION_KEY_PREFIX}.{rel}")
}

/// Description key of a property of a resource (`rest.description.person.firstName`).
#[must_use]
pub fn property_key(item_rel: &str, property: &str) -> String {
    format!("{DESCRIPTION_KEY_PREFIX}.{item_rel}.{property}")
}
