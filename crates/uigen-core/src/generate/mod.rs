//! Artifact generators.
//!
//! Each submodule is a pure text generator over the specification model:
//!
//! - [`markup`] — one form field to one markup fragment (the per-type
//!   dispatch table lives here and nowhere else)
//! - [`component`] — per-component class and form artifacts
//! - [`routing`] — the route table, import declarations, and app module
//! - [`shell`] — navigation and the top-level shell page
//!
//! The orchestrator in `crate::application` composes these into the final
//! artifact set.

pub mod component;
pub mod markup;
pub mod routing;
pub mod shell;

/// Indent every non-empty line of `text` by `spaces` spaces.
///
/// Fragments are generated at column zero and re-indented where they are
/// embedded, so each generator stays ignorant of its surroundings.
pub(crate) fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
