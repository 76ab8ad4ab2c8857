//! Identifier derivation from user-supplied names.
//!
//! Every generated identifier (component class, route path, selector,
//! field label) funnels through these three functions so the naming
//! conventions stay consistent across artifacts. All of them are pure and
//! total: empty input yields empty output, no guards.

/// Class-name form: first character uppercased, remainder unchanged.
///
/// `"register"` → `"Register"`, `"myForm"` → `"MyForm"`.
pub fn class_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Route/selector form: fully lowercased.
pub fn path_case(name: &str) -> String {
    name.to_lowercase()
}

/// Human-readable label form: every whitespace-delimited token
/// capitalized, remainder lowercased ("title case").
///
/// `"first NAME"` → `"First Name"`.
pub fn label_case(name: &str) -> String {
    name.split_whitespace()
        .map(|token| class_case(&token.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}
