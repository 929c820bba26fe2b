//! Casing conversion between kebab-case and PascalCase/camelCase.
//!
//! Used for identifiers and for single path segments (file and directory
//! names). All functions are total.

/// PascalCase / camelCase -> kebab-case.
///
/// A hyphen is inserted before an uppercase letter when it is
///
/// - preceded by a lowercase letter (`inputBlock` -> `input-block`), or
/// - preceded by an uppercase letter and followed by a lowercase letter
///   (acronym boundary: `HTMLParser` -> `html-parser`).
///
/// The second rule never applies at index 1: a single leading capital is part
/// of the first word, so `VForm` -> `vform`.
///
/// Already-kebab input is returned unchanged.
pub fn to_kebab_case(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    let mut result = String::with_capacity(identifier.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();

            let after_lower = prev.is_lowercase();
            let acronym_end =
                i > 1 && prev.is_uppercase() && next.is_some_and(|n| n.is_lowercase());

            if after_lower || acronym_end {
                result.push('-');
            }
        }
        result.extend(c.to_lowercase());
    }

    result
}

/// kebab-case -> PascalCase.
///
/// `input-block-editor` -> `InputBlockEditor`. Empty segments (`a--b`) are
/// dropped. Characters after the first of each segment are kept as-is.
pub fn to_pascal_case(identifier: &str) -> String {
    identifier
        .split('-')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

/// kebab-case -> camelCase.
pub fn to_camel_case(identifier: &str) -> String {
    let pascal = to_pascal_case(identifier);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether a path segment is written in PascalCase.
///
/// Non-empty, starts with an ASCII uppercase letter, ASCII alphanumeric only.
pub fn is_pascal_case(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Whether a segment is already kebab-case (no uppercase letters).
pub fn is_kebab_case(segment: &str) -> bool {
    !segment.is_empty() && !segment.chars().any(|c| c.is_uppercase())
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "casing_test.rs"]
mod tests;

#[cfg(test)]
#[path = "casing_proptests.rs"]
mod proptests;
